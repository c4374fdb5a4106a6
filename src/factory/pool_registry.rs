//! Registry of pools keyed by canonical asset pair.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::info;

use crate::config::PoolConfig;
use crate::domain::{AssetId, AssetPair, PoolId};
use crate::error::AmmError;
use crate::pools::Pool;

#[derive(Debug, Default)]
struct RegistryState {
    by_pair: HashMap<AssetPair, Arc<Pool>>,
    by_id: HashMap<PoolId, Arc<Pool>>,
    all: Vec<Arc<Pool>>,
}

/// Creates pools and guarantees one pool per unordered asset pair.
///
/// Pools are keyed by their canonical [`AssetPair`], so lookups resolve to
/// the same pool whichever order the caller names the assets in. Pool ids
/// are derived from the pair alone, see [`PoolId::derive`].
///
/// # Thread Safety
///
/// The index sits behind an `RwLock`; a lookup never waits on a pool
/// operation, and pool creation is atomic with its duplicate check.
///
/// # Example
///
/// ```rust
/// use hydra_dex::config::PoolConfig;
/// use hydra_dex::domain::{AssetId, PoolId};
/// use hydra_dex::factory::PoolRegistry;
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// let weth = AssetId::from_bytes([2u8; 32]);
///
/// let registry = PoolRegistry::new(PoolConfig::default()).expect("valid config");
/// let id = registry.create_pool(weth, usdc).expect("new pair");
///
/// assert_eq!(registry.get_pool(usdc, weth), Some(id));
/// assert_eq!(PoolId::derive(usdc, weth).ok(), Some(id));
/// assert_eq!(registry.pool_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct PoolRegistry {
    config: PoolConfig,
    state: RwLock<RegistryState>,
}

impl PoolRegistry {
    /// Creates an empty registry stamping `config` onto every new pool.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `config` fails
    /// [`PoolConfig::validate`], as a deserialized config may.
    pub fn new(config: PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            config,
            state: RwLock::new(RegistryState::default()),
        })
    }

    /// The configuration every pool is created with.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Creates and initializes the pool for `x`/`y`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if `x == y`.
    /// - [`AmmError::ZeroAsset`] if either id is the null asset.
    /// - [`AmmError::PairExists`] if the pair already has a pool.
    pub fn create_pool(&self, x: AssetId, y: AssetId) -> Result<PoolId, AmmError> {
        let pair = AssetPair::new(x, y)?;
        let mut state = self.write();
        if state.by_pair.contains_key(&pair) {
            return Err(AmmError::PairExists);
        }
        let pool = Arc::new(self.build(pair)?);
        let id = pool.id();
        state.by_pair.insert(pair, Arc::clone(&pool));
        state.by_id.insert(id, Arc::clone(&pool));
        state.all.push(pool);
        info!(pool = %id, %pair, index = state.all.len() - 1, "pool created");
        Ok(id)
    }

    /// Returns the pool for `x`/`y`, creating it first if the pair is new.
    ///
    /// # Errors
    ///
    /// [`AmmError::IdenticalAssets`] or [`AmmError::ZeroAsset`].
    pub fn get_or_create(&self, x: AssetId, y: AssetId) -> Result<Arc<Pool>, AmmError> {
        let pair = AssetPair::new(x, y)?;
        if let Some(pool) = self.read().by_pair.get(&pair) {
            return Ok(Arc::clone(pool));
        }
        match self.create_pool(x, y) {
            // another caller may have won the race between the two locks
            Ok(_) | Err(AmmError::PairExists) => self
                .read()
                .by_pair
                .get(&pair)
                .cloned()
                .ok_or(AmmError::PairNotFound),
            Err(e) => Err(e),
        }
    }

    /// Id of the pool for `x`/`y`, in either order.
    #[must_use]
    pub fn get_pool(&self, x: AssetId, y: AssetId) -> Option<PoolId> {
        self.pool(x, y).map(|p| p.id())
    }

    /// The pool for `x`/`y`, in either order.
    #[must_use]
    pub fn pool(&self, x: AssetId, y: AssetId) -> Option<Arc<Pool>> {
        let pair = AssetPair::new(x, y).ok()?;
        self.read().by_pair.get(&pair).cloned()
    }

    /// The pool with id `id`.
    #[must_use]
    pub fn pool_by_id(&self, id: &PoolId) -> Option<Arc<Pool>> {
        self.read().by_id.get(id).cloned()
    }

    /// Number of pools ever created.
    #[must_use]
    pub fn pool_count(&self) -> usize {
        self.read().all.len()
    }

    /// The `index`-th pool in creation order.
    #[must_use]
    pub fn pool_at(&self, index: usize) -> Option<Arc<Pool>> {
        self.read().all.get(index).cloned()
    }

    /// Snapshot of every pool in creation order.
    #[must_use]
    pub fn pools(&self) -> Vec<Arc<Pool>> {
        self.read().all.clone()
    }

    fn build(&self, pair: AssetPair) -> Result<Pool, AmmError> {
        let pool = Pool::new(pair.pool_id(), self.config);
        pool.initialize(pair.first(), pair.second())?;
        Ok(pool)
    }

    // entries are inserted together after all checks, so a poisoned lock
    // still guards a consistent index
    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
