use serde::Serialize;
use strum_macros::{Display, EnumString};

#[derive(Debug, Eq, PartialEq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum VulnDashEnv {
    Dev,
    Prod,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceType {
    Bar,
}
