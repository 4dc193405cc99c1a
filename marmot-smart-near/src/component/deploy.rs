/// Initializes component state from config when the contract is deployed
pub trait Deploy {
    type Config;

    fn deploy(config: Self::Config);
}
