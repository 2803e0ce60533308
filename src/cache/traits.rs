use async_trait::async_trait;

/// 缓存查询结果
///
/// `ExistsButNoValue` 表示后端暂时不可用或值无法取出，
/// 调用方应按未命中处理但不要主动回填。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    ExistsButNoValue,
}

/// 对象缓存统一接口，所有后端以字符串形式存取序列化后的值
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;

    /// ttl 为 0 时使用后端的默认 TTL
    async fn insert_raw(&self, key: String, value: String, ttl: u64);

    async fn remove(&self, key: &str);

    async fn invalidate_all(&self);
}
