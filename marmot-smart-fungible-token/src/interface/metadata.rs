use crate::Metadata;

pub const FT_METADATA_SPEC: &str = "ft-1.0.0";

pub trait FungibleTokenMetadataProvider {
    fn ft_metadata(&self) -> Metadata;
}
