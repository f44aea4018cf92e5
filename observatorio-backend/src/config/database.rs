use educe::Educe;
use serde::Deserialize;

#[derive(Deserialize, Educe)]
#[educe(Debug)]
pub struct Database {
    #[educe(Debug(ignore))]
    pub url: String,
    /// Insert the sample water bodies when the table is empty.
    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_seed() -> bool {
    true
}
