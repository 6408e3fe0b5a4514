use crate::config::Config;

#[derive(Debug, Clone)]
pub struct FetchParams {
    pub app_config: Config,
}
