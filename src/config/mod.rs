//! Configuration module for seo-gate
//!
//! This module handles:
//! - Project-level configuration (seo-gate.toml)
//! - Submission threshold
//! - Store location

mod project_config;

pub use project_config::{
    load_config,
    SeoGateConfig,
    StoreConfig,
    WorkflowConfig,
    CONFIG_TEMPLATE,
    JSON_CONFIG_FILE,
    TOML_CONFIG_FILE,
};
