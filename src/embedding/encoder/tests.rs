use super::*;
use crate::constants::{DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN, ENCODER_FILES};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

mod config_tests {
    use super::*;

    #[test]
    fn test_encoder_config_default() {
        let config = EncoderConfig::default();
        assert_eq!(config.model_name, "all-MiniLM-L6-v2");
        assert_eq!(config.embedding_dim, DEFAULT_EMBEDDING_DIM);
        assert_eq!(config.max_seq_len, DEFAULT_MAX_SEQ_LEN);
        assert!(!config.testing_stub);
        assert!(config.model_dir.as_os_str().is_empty());
    }

    #[test]
    fn test_encoder_config_for_model() {
        let config = EncoderConfig::for_model(Path::new("/opt/app/models"), "all-MiniLM-L6-v2");
        assert_eq!(
            config.model_dir,
            PathBuf::from("/opt/app/models/all-MiniLM-L6-v2")
        );
        assert_eq!(config.model_name, "all-MiniLM-L6-v2");
    }

    #[test]
    fn test_encoder_config_stub_validates_without_paths() {
        let config = EncoderConfig::stub();
        assert!(config.testing_stub);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_encoder_config_requires_model_dir() {
        let config = EncoderConfig::default();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidConfig { .. }));
    }

    #[test]
    fn test_encoder_config_rejects_zero_dim() {
        let config = EncoderConfig::stub().with_embedding_dim(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_files_lists_absent_files() {
        let dir = TempDir::new().unwrap();
        let config = EncoderConfig::for_model(dir.path(), "mini");
        std::fs::create_dir_all(&config.model_dir).unwrap();
        std::fs::write(config.model_dir.join("config.json"), "{}").unwrap();

        let missing = config.missing_files();
        assert_eq!(missing, vec!["model.safetensors", "tokenizer.json"]);
        assert!(!config.files_available());
    }

    #[test]
    fn test_files_available_when_all_present() {
        let dir = TempDir::new().unwrap();
        let config = EncoderConfig::for_model(dir.path(), "mini");
        std::fs::create_dir_all(&config.model_dir).unwrap();
        for file in ENCODER_FILES {
            std::fs::write(config.model_dir.join(file), "x").unwrap();
        }

        assert!(config.files_available());
    }
}

mod stub_tests {
    use super::*;

    fn stub_encoder() -> SentenceEncoder {
        SentenceEncoder::load(EncoderConfig::stub()).expect("stub loads")
    }

    #[test]
    fn test_stub_is_stub() {
        let encoder = stub_encoder();
        assert!(encoder.is_stub());
        assert_eq!(encoder.dim(), DEFAULT_EMBEDDING_DIM);
    }

    #[test]
    fn test_stub_batch_shape_and_order() {
        let encoder = stub_encoder();
        let vectors = encoder
            .encode_batch(&["Good news", "Bad news", "Good news"])
            .unwrap();

        assert_eq!(vectors.len(), 3);
        assert!(vectors.iter().all(|v| v.len() == DEFAULT_EMBEDDING_DIM));
        assert_eq!(vectors[0], vectors[2]);
        assert_ne!(vectors[0], vectors[1]);
    }

    #[test]
    fn test_stub_vectors_are_unit_length() {
        let encoder = stub_encoder();
        let vectors = encoder.encode_batch(&["Markets rally"]).unwrap();
        let norm: f32 = vectors[0].iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-4, "norm was {norm}");
    }

    #[test]
    fn test_stub_custom_dim() {
        let encoder = SentenceEncoder::load(EncoderConfig::stub().with_embedding_dim(8)).unwrap();
        let vectors = encoder.encode_batch(&["a"]).unwrap();
        assert_eq!(vectors[0].len(), 8);
    }

    #[test]
    fn test_empty_batch_returns_empty() {
        let encoder = stub_encoder();
        assert!(encoder.encode_batch(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_debug_output() {
        let encoder = stub_encoder();
        let debug_str = format!("{:?}", encoder);
        assert!(debug_str.contains("SentenceEncoder"));
        assert!(debug_str.contains("Stub"));
    }
}

mod load_tests {
    use super::*;

    #[test]
    fn test_load_missing_files_is_model_not_found() {
        let dir = TempDir::new().unwrap();
        let config = EncoderConfig::for_model(dir.path(), "all-MiniLM-L6-v2");

        let err = SentenceEncoder::load(config).unwrap_err();
        match err {
            EmbeddingError::ModelNotFound { path } => {
                assert!(path.ends_with("all-MiniLM-L6-v2"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_corrupt_files_is_load_failure() {
        let dir = TempDir::new().unwrap();
        let config = EncoderConfig::for_model(dir.path(), "broken");
        std::fs::create_dir_all(&config.model_dir).unwrap();
        for file in ENCODER_FILES {
            std::fs::write(config.model_dir.join(file), "not a model").unwrap();
        }

        let err = SentenceEncoder::load(config).unwrap_err();
        assert!(matches!(err, EmbeddingError::ModelLoadFailed { .. }));
    }
}
