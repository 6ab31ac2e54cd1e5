pub mod riskregister;
