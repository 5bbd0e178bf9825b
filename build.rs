use std::env;
use std::fs;
use std::path::Path;

/// Variables que la app lee con option_env!
const KNOWN_KEYS: &[&str] = &[
    "APP_TITLE",
    "MOUNT_ID",
    "BASE_PATH",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    for key in KNOWN_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(e) => {
            println!("cargo:warning=No se pudo leer .env: {}", e);
            return;
        }
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            println!("cargo:warning=Línea ignorada en .env: {}", line);
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !KNOWN_KEYS.contains(&key) {
            println!("cargo:warning=Clave desconocida en .env: {}", key);
            continue;
        }

        // El entorno del proceso tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
