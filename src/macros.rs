#[macro_export]
macro_rules! env_bool {
    ($key:expr) => {
        std::env::var($key)
            .map(|v| v.trim().to_lowercase())
            .map(|v| v == "1" || v == "true")
            .unwrap_or(false)
    };
    ($key:expr, $default:expr) => {
        std::env::var($key)
            .map(|v| v.trim().to_lowercase())
            .map(|v| v == "1" || v == "true")
            .unwrap_or($default)
    };
}

#[macro_export]
macro_rules! env_str {
    ($key:expr) => {
        std::env::var($key).unwrap_or_default().trim().to_string()
    };
    ($key:expr, $default:expr) => {
        std::env::var($key).unwrap_or_else(|_| $default.to_string()).trim().to_string()
    };
}

#[macro_export]
macro_rules! print_dbg {
    ($debug:expr, $($arg:tt)*) => {
        if $debug {
            println!("{}", format!($($arg)*).blue())
        }
    };
}

#[macro_export]
macro_rules! print_warn {
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*).yellow())
    };
}

#[macro_export]
macro_rules! print_err {
    ($($arg:tt)*) => {
        eprintln!("{}", format!($($arg)*).red())
    };
}

#[macro_export]
macro_rules! print_header {
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*).bold().underline())
    };
}

#[macro_export]
macro_rules! console_url {
    ($url:expr) => {
        format!("{}", $url).truecolor(92, 145, 239).underline()
    };
}

#[macro_export]
macro_rules! console_note {
    ($($arg:tt)*) => {
        format!("{}", format!($($arg)*).dimmed())
    };
}

#[macro_export]
macro_rules! load_err {
    ($($arg:tt)*) => {
        anyhow::anyhow!(crate::error::VulnDashError {
            kind: crate::error::ErrorKind::Load,
            message: format!($($arg)*),
            sentry: false
        })
    };
}

#[macro_export]
macro_rules! bind_err {
    ($($arg:tt)*) => {
        anyhow::anyhow!(crate::error::VulnDashError {
            kind: crate::error::ErrorKind::Bind,
            message: format!($($arg)*),
            sentry: false
        })
    };
}

#[macro_export]
macro_rules! sentry_err {
    ($kind:expr, $($arg:tt)*) => {
        anyhow::anyhow!(crate::error::VulnDashError {
            kind: $kind,
            message: format!($($arg)*),
            sentry: true
        })
    };
}
