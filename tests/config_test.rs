use gen_mq::config::load_config;
use gen_mq::error::Error;
use std::fs;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("project.yaml");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

const VALID_CONFIG: &str = r#"
modules:
    - posix:
        - mq_posix.h
        - mq_posix_open.c
    - sysv:
        - mq_sysv.h
        - mq_sysv_create.c
templates:
    - posix:
        - mq_posix.template
        - mq_posix_open.template
    - sysv:
        - mq_sysv.template
        - mq_sysv_create.template
"#;

#[test]
fn test_load_valid_config() {
    let (_temp_dir, config_path) = write_config(VALID_CONFIG);
    let config = load_config(&config_path).unwrap();

    assert!(!config.is_empty());
    let names: Vec<&str> = config.variant_names().collect();
    assert_eq!(names, vec!["posix", "sysv"]);

    let posix = config.variant("posix").unwrap();
    assert_eq!(posix.len(), 2);
    assert_eq!(posix[0].module, "mq_posix.h");
    assert_eq!(posix[0].template, "mq_posix.template");
    assert_eq!(posix[1].module, "mq_posix_open.c");
}

#[test]
fn test_unknown_variant_is_none() {
    let (_temp_dir, config_path) = write_config(VALID_CONFIG);
    let config = load_config(&config_path).unwrap();

    assert!(config.variant("amqp").is_none());
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_config(temp_dir.path().join("project.yaml"));

    assert!(matches!(result, Err(Error::IoError(_))));
}

#[test]
fn test_invalid_document_shape() {
    let (_temp_dir, config_path) = write_config("modules: 42\ntemplates: []\n");
    let result = load_config(&config_path);

    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_misaligned_sequences() {
    let (_temp_dir, config_path) = write_config(
        r#"
modules:
    - posix:
        - mq_posix.h
        - mq_posix_open.c
    - sysv:
        - mq_sysv.h
templates:
    - posix:
        - mq_posix.template
    - sysv:
        - mq_sysv.template
"#,
    );
    let result = load_config(&config_path);

    match result {
        Err(Error::ConfigError(msg)) => {
            assert!(msg.contains("posix"), "unexpected message: {}", msg)
        }
        other => panic!("Expected ConfigError, got {:?}", other),
    }
}

#[test]
fn test_duplicate_module_name() {
    let (_temp_dir, config_path) = write_config(
        r#"
modules:
    - posix:
        - mq_posix.h
        - mq_posix.h
    - sysv:
        - mq_sysv.h
templates:
    - posix:
        - mq_posix.template
        - mq_posix_open.template
    - sysv:
        - mq_sysv.template
"#,
    );
    let result = load_config(&config_path);

    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_single_variant_rejected() {
    let (_temp_dir, config_path) = write_config(
        r#"
modules:
    - posix:
        - mq_posix.h
templates:
    - posix:
        - mq_posix.template
"#,
    );
    let result = load_config(&config_path);

    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_bundled_config_loads() {
    let config = load_config("conf/project.yaml").unwrap();

    let posix = config.variant("posix").unwrap();
    let sysv = config.variant("sysv").unwrap();
    assert_eq!(posix.len(), 8);
    assert_eq!(sysv.len(), 7);
    assert!(posix.iter().any(|pair| pair.module == "Makefile"));
    assert!(sysv.iter().any(|pair| pair.module == "mq_sysv_delete.c"));
}
