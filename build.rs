use std::env;
use std::fs;
use std::path::Path;

/// Variables que la app lee con `option_env!` (ver src/config.rs)
const CONFIG_KEYS: &[&str] = &[
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "GOOGLE_MAPS_API_KEY",
    "DEFAULT_MAP_CENTER_LAT",
    "DEFAULT_MAP_CENTER_LNG",
    "DEFAULT_MAP_ZOOM",
    "FOCUS_ZOOM",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No .env file found. Copy .env.example to .env (GOOGLE_MAPS_API_KEY is needed for the partner map).");
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(e) => {
            println!("cargo:warning=Could not read .env: {}", e);
            return;
        }
    };

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        // El entorno del proceso tiene prioridad sobre .env
        if env::var(key).is_ok() {
            continue;
        }
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=Unknown key in .env: {}", key);
        }
        println!("cargo:rustc-env={}={}", key, value);
    }
}
