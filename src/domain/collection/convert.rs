//! Conversion: CollectionMetadataResponse → CollectionMetadata.

use super::wire::CollectionMetadataResponse;
use super::CollectionMetadata;
use crate::shared::{Chain, ContractAddress};

impl<'a> From<(CollectionMetadataResponse, &'a ContractAddress, Chain)> for CollectionMetadata {
    fn from((source, requested, chain): (CollectionMetadataResponse, &'a ContractAddress, Chain)) -> Self {
        Self {
            address: source
                .token_address
                .map(ContractAddress::from)
                .unwrap_or_else(|| requested.clone()),
            chain,
            name: source.name,
            symbol: source.symbol,
            contract_type: source.contract_type,
            floor_price: source.floor_price,
            floor_price_usd: source.floor_price_usd,
            floor_price_currency: source.floor_price_currency,
            collection_logo: source.collection_logo,
            collection_banner_image: source.collection_banner_image,
            project_url: source.project_url,
            extra: source.extra,
        }
    }
}
