/// Connection limits enforced by the registry
#[derive(Debug, Clone)]
pub struct ConnectionLimits {
    pub max_total: usize,
}

impl Default for ConnectionLimits {
    fn default() -> Self {
        Self { max_total: 128 }
    }
}
