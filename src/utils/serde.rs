use serde::{Deserialize, Deserializer};

/// Reads an optional float, treating an empty cell as a missing score (`NaN`).
pub fn deserialize_score<'d, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'d>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
