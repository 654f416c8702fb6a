use std::hash::{Hash, Hasher};
use std::sync::Arc;

use graphql_parser::parse_query;
use moka::sync::Cache;
use tracing::{error, instrument, trace};
use xxhash_rust::xxh3::Xxh3;

use crate::config::SignatureConfig;
use crate::error::SignatureError;
use crate::signature::SignaturePipeline;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSignature {
    pub operation_name: Option<String>,
    /// The compact, normalized operation.
    pub signature: String,
    /// md5 hex digest of `signature`.
    pub hash: String,
}

/// Turns raw operation text into signatures, memoizing the result per
/// operation text and operation name.
pub struct SignatureProcessor {
    pipeline: SignaturePipeline,
    cache: Cache<u64, Arc<OperationSignature>>,
}

impl Default for SignatureProcessor {
    fn default() -> Self {
        Self::new(&SignatureConfig::default())
    }
}

impl SignatureProcessor {
    pub fn new(config: &SignatureConfig) -> Self {
        Self {
            pipeline: config.into(),
            cache: Cache::new(config.cache_size),
        }
    }

    #[instrument(level = "trace", skip_all, fields(operation_name = ?operation_name))]
    pub fn process(
        &self,
        query: &str,
        operation_name: Option<&str>,
    ) -> Result<Arc<OperationSignature>, SignatureError> {
        let cache_key = cache_key(query, operation_name);

        if let Some(signature) = self.cache.get(&cache_key) {
            trace!("Found operation signature in cache: {}", signature.signature);
            return Ok(signature);
        }

        let document = parse_query::<&str>(query).map_err(|err| {
            error!("Failed to parse GraphQL operation: {}", err);
            SignatureError::from(err)
        })?;

        let signature = self
            .pipeline
            .signature(document, operation_name.unwrap_or_default())
            .map_err(|err| {
                error!("Failed to print operation signature: {}", err);
                err
            })?;
        let hash = format!("{:x}", md5::compute(signature.as_bytes()));

        trace!("Computed operation signature (hash={}): {}", hash, signature);

        let operation_signature = Arc::new(OperationSignature {
            operation_name: operation_name.map(ToOwned::to_owned),
            signature,
            hash,
        });
        self.cache.insert(cache_key, operation_signature.clone());

        Ok(operation_signature)
    }

    pub fn cached_entries(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

fn cache_key(query: &str, operation_name: Option<&str>) -> u64 {
    let mut hasher = Xxh3::new();
    query.hash(&mut hasher);
    operation_name.hash(&mut hasher);
    hasher.finish()
}
