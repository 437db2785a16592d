//! Integration tests for CLI functionality

#[cfg(feature = "cli")]
mod cli_integration_tests {
    use std::fs;
    use tempfile::TempDir;

    use soundseek::cli::commands::execute;
    use soundseek::cli::paths::{validate_config_path, PersistentConfig};
    use soundseek::cli::{Commands, OutputFormat};
    use soundseek::search::SearchConfig;

    fn find_command(file: std::path::PathBuf, word: &str) -> Commands {
        Commands::Find {
            file,
            word: word.to_string(),
            top_k: None,
            initial_groups: None,
            min_group_size: None,
            min_groups: None,
            seed: None,
            show_codes: true,
            output: OutputFormat::Text,
        }
    }

    #[test]
    fn test_persistent_config_default_resolves_to_search_defaults() {
        let config = PersistentConfig::default();
        assert_eq!(config.top_k, None);
        assert_eq!(config.resolve(), SearchConfig::default());
    }

    #[test]
    fn test_persistent_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.json");

        let config = PersistentConfig {
            top_k: Some(3),
            min_groups: Some(1),
            ..PersistentConfig::default()
        };
        let written = config.save_to(Some(&config_path)).unwrap();
        assert_eq!(written, config_path);

        let loaded = PersistentConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.resolve().top_k, 3);
        assert_eq!(loaded.resolve().initial_groups, 5);
    }

    #[test]
    fn test_missing_config_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("absent.json");

        let loaded = PersistentConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(loaded, PersistentConfig::default());
    }

    #[test]
    fn test_malformed_config_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "{ not json").unwrap();

        assert!(PersistentConfig::load_from(Some(&config_path)).is_err());
    }

    #[test]
    fn test_config_path_requires_json_extension() {
        assert!(validate_config_path(std::path::Path::new("settings.json")).is_ok());
        assert!(validate_config_path(std::path::Path::new("settings.toml")).is_err());
        assert!(validate_config_path(std::path::Path::new("settings")).is_err());
    }

    #[test]
    fn test_cli_options_override_saved_settings() {
        let saved = PersistentConfig {
            top_k: Some(3),
            seed: Some(7),
            ..PersistentConfig::default()
        };
        let cli = PersistentConfig {
            top_k: Some(10),
            ..PersistentConfig::default()
        };

        let merged = saved.merge_with_cli(&cli);
        assert_eq!(merged.top_k, Some(10));
        assert_eq!(merged.seed, Some(7));
    }

    #[test]
    fn test_find_command_on_text_file() {
        let temp_dir = TempDir::new().unwrap();
        let corpus = temp_dir.path().join("corpus.txt");
        fs::write(&corpus, "Lithuania is a beautiful country.\nWelcome to Lithuania!\n").unwrap();
        let config_path = temp_dir.path().join("config.json");

        execute(find_command(corpus, "lithuania"), Some(&config_path)).unwrap();
    }

    #[test]
    fn test_find_command_without_letters_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let corpus = temp_dir.path().join("corpus.txt");
        fs::write(&corpus, "Hello world\n").unwrap();
        let config_path = temp_dir.path().join("config.json");

        execute(find_command(corpus, "1234"), Some(&config_path)).unwrap();
    }

    #[test]
    fn test_find_command_rejects_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let corpus = temp_dir.path().join("missing.txt");
        let config_path = temp_dir.path().join("config.json");

        assert!(execute(find_command(corpus, "hello"), Some(&config_path)).is_err());
    }

    #[test]
    fn test_find_command_rejects_non_text_file() {
        let temp_dir = TempDir::new().unwrap();
        let corpus = temp_dir.path().join("corpus.csv");
        fs::write(&corpus, "hello,world\n").unwrap();
        let config_path = temp_dir.path().join("config.json");

        assert!(execute(find_command(corpus, "hello"), Some(&config_path)).is_err());
    }

    #[test]
    fn test_find_command_rejects_invalid_settings() {
        let temp_dir = TempDir::new().unwrap();
        let corpus = temp_dir.path().join("corpus.txt");
        fs::write(&corpus, "Hello world\n").unwrap();
        let config_path = temp_dir.path().join("config.json");

        let command = Commands::Find {
            file: corpus,
            word: "hello".to_string(),
            top_k: None,
            initial_groups: Some(2),
            min_group_size: None,
            min_groups: Some(4),
            seed: None,
            show_codes: false,
            output: OutputFormat::Json,
        };
        assert!(execute(command, Some(&config_path)).is_err());
    }

    #[test]
    fn test_encode_command() {
        let command = Commands::Encode {
            words: vec!["Robert".to_string(), "42".to_string()],
        };
        execute(command, None).unwrap();
    }

    #[test]
    fn test_settings_command_persists_updates() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let command = Commands::Settings {
            set_top_k: Some(8),
            set_initial_groups: None,
            set_min_group_size: None,
            set_min_groups: None,
            set_batch_size: Some(500),
            set_seed: None,
            reset: false,
        };
        execute(command, Some(&config_path)).unwrap();

        let loaded = PersistentConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(loaded.top_k, Some(8));
        assert_eq!(loaded.batch_size, Some(500));
        assert_eq!(loaded.seed, None);
    }

    #[test]
    fn test_settings_command_refuses_invalid_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let command = Commands::Settings {
            set_top_k: None,
            set_initial_groups: None,
            set_min_group_size: Some(0),
            set_min_groups: None,
            set_batch_size: None,
            set_seed: None,
            reset: false,
        };
        assert!(execute(command, Some(&config_path)).is_err());
        assert!(!config_path.exists());
    }

    #[test]
    fn test_settings_reset() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        PersistentConfig {
            top_k: Some(2),
            ..PersistentConfig::default()
        }
        .save_to(Some(&config_path))
        .unwrap();

        let command = Commands::Settings {
            set_top_k: None,
            set_initial_groups: None,
            set_min_group_size: None,
            set_min_groups: None,
            set_batch_size: None,
            set_seed: None,
            reset: true,
        };
        execute(command, Some(&config_path)).unwrap();

        let loaded = PersistentConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(loaded, PersistentConfig::default());
    }
}
