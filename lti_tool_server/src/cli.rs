use std::{env, env::VarError};

/// There's no real CLI for the server. Any argument prints the help and the current configuration.
pub fn handle_command_line_args() -> bool {
    let has_cli_args = env::args().count() > 1;
    if has_cli_args {
        display_readme();
        display_envs();
    }
    has_cli_args
}

fn display_readme() {
    const README: &str = include_str!("./cli-help.txt");
    println!("\n{README}\n");
}

fn display_envs() {
    // Never list LTI_GATEWAY_HMAC_SECRET or LTI_PLATFORM_ACCESS_TOKEN here
    const DISPLAY_ENVS: [&str; 7] = [
        "RUST_LOG",
        "LTI_HOST",
        "LTI_PORT",
        "LTI_LAUNCH_URL",
        "LTI_LAUNCH_TTL",
        "LTI_GATEWAY_HMAC_CHECKS",
        "LTI_PLATFORM_TIMEOUT",
    ];

    println!("Current environment values (EXCLUDING variables that contain secrets):");
    DISPLAY_ENVS.iter().for_each(|&name| {
        let val = match env::var(name) {
            Ok(s) => s,
            Err(VarError::NotPresent) => "Not set".into(),
            Err(VarError::NotUnicode(s)) => format!("Invalid value: {}", s.to_string_lossy()),
        };
        println!("  {name:<35} {val:<15}");
    })
}
