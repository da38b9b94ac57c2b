pub mod metrics_engine;
