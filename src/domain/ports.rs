/// Hour used when a request leaves `hour` out.
pub const DEFAULT_HOUR: i64 = 12;

pub trait ConfigProvider: Send + Sync {
    fn default_hour(&self) -> i64 {
        DEFAULT_HOUR
    }

    fn strict_ranges(&self) -> bool {
        false
    }
}
