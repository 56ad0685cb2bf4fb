use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::BarLineChartStyleOptions;

pub const STYLE_OPTIONS_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleOptionsJsonContractV1 {
    pub schema_version: u32,
    pub options: BarLineChartStyleOptions,
}

impl BarLineChartStyleOptions {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize style options json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = StyleOptionsJsonContractV1 {
            schema_version: STYLE_OPTIONS_JSON_SCHEMA_V1,
            options: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize style options contract v1: {e}"))
        })
    }

    /// Accepts either a bare options object or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse style options json: {e}"))
        })?;

        if value.get("schema_version").is_none() {
            return serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse style options json: {e}"))
            });
        }

        let payload: StyleOptionsJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse style options json payload: {e}"))
        })?;
        if payload.schema_version != STYLE_OPTIONS_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported style options schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.options)
    }
}
