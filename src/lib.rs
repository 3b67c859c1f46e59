//! # CBOW Classifier
//!
//! A continuous-bag-of-words text classifier pipeline built on the
//! [Burn](https://burn.dev) deep-learning framework.
//!
//! The pipeline turns a tabular text source into a trainable model
//! and a JSON-in/JSON-out predictor:
//!
//! - `domain`: vocabulary and record types, framework-free
//! - `data`: CSV loading, tokenization, vectorization, splitting
//!   and batching into Burn tensors
//! - `ml`: the embedding + sum-pool + linear classifier, and the
//!   inference predictor
//!
//! ## Example
//!
//! ```rust,no_run
//! use burn::backend::NdArray;
//! use cbow_classifier::{
//!     CbowClassifierConfig, CbowVectorizer, CsvLoader, DatasetSplits, Predictor,
//!     RecordSource, WordTokenizer,
//! };
//!
//! type Backend = NdArray<f32>;
//!
//! let records = CsvLoader::new("data/cbow.csv").load_all().unwrap();
//! let vectorizer = CbowVectorizer::fit(&records, WordTokenizer::new());
//! let splits = DatasetSplits::from_records(&records, &vectorizer, 32).unwrap();
//!
//! let device = Default::default();
//! let model = CbowClassifierConfig::new(vectorizer.vocabulary().len())
//!     .init::<Backend>(&device);
//! // ... train `model` with the splits' data loaders, then:
//! let predictor = Predictor::new(model, vectorizer, device);
//! let json = predictor
//!     .predict_json(r#"{"inputs": ["the cat"]}"#)
//!     .unwrap();
//! ```

pub mod data;
pub mod domain;
pub mod error;
pub mod ml;

pub use data::loader::CsvLoader;
pub use data::splitter::DatasetSplits;
pub use data::tokenizer::WordTokenizer;
pub use data::vectorizer::CbowVectorizer;
pub use domain::record::{Split, TextRecord};
pub use domain::traits::RecordSource;
pub use domain::vocabulary::Vocabulary;
pub use error::{Error, Result};
pub use ml::model::{CbowClassifier, CbowClassifierConfig};
pub use ml::predictor::{PredictRequest, PredictResponse, Prediction, Predictor};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
