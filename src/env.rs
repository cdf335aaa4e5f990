use std::str::FromStr;

use crate::enums::VulnDashEnv;
use crate::{env_bool, env_str};

#[derive(Debug)]
pub struct Environment {
    pub debug: bool,
    pub vulndash_env: VulnDashEnv,
}

pub fn load_env() -> Environment {
    // Unset means dev: the dashboard is a development server.
    let vulndash_env = VulnDashEnv::from_str(&env_str!("VULNDASH_ENV", "dev").to_lowercase())
        .unwrap_or(VulnDashEnv::Prod);
    Environment {
        debug: env_bool!("VULNDASH_DEBUG", vulndash_env == VulnDashEnv::Dev),
        vulndash_env,
    }
}
