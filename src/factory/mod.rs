//! Pool creation and lookup.
//!
//! The [`PoolRegistry`] is the only place pools come from. It sorts each
//! requested pair into canonical order, derives the pool id from it,
//! initializes the new pool and indexes it so that either ordering of the
//! pair resolves to the same instance.
//!
//! # Usage
//!
//! ```rust
//! use hydra_dex::config::PoolConfig;
//! use hydra_dex::domain::AssetId;
//! use hydra_dex::error::AmmError;
//! use hydra_dex::factory::PoolRegistry;
//!
//! let a = AssetId::from_bytes([1u8; 32]);
//! let b = AssetId::from_bytes([2u8; 32]);
//!
//! let registry = PoolRegistry::new(PoolConfig::default()).expect("valid config");
//! registry.create_pool(a, b).expect("new pair");
//! assert_eq!(registry.create_pool(b, a), Err(AmmError::PairExists));
//! ```

mod pool_registry;

pub use pool_registry::PoolRegistry;
