use crate::domain::riskregister::risk_register::RiskRegister;

use super::{ControlMapError, ControlMapper};

pub struct CommandExecutor<M> {
    control_mapper: M,
}

impl<M> CommandExecutor<M>
where
    M: ControlMapper,
{
    pub fn new(control_mapper: M) -> Self {
        Self { control_mapper }
    }

    /// Maps every risk in the register to its framework's controls and
    /// returns a new register with the mapped controls; the input register
    /// is never mutated.
    pub async fn map_register_controls(
        &self,
        register: &RiskRegister,
    ) -> Result<RiskRegister, ControlMapError> {
        let mut mapped = RiskRegister::new();
        for risk in register.risks() {
            let controls = self
                .control_mapper
                .map_controls(risk.name(), risk.description(), risk.framework())
                .await?;
            mapped.insert(risk.with_controls(controls));
        }
        Ok(mapped)
    }
}
