/// CAS（Compare-And-Swap）操作最大重试次数
pub const MAX_CAS_RETRIES: u32 = 20;

/// 主题搜索最多返回的条数
pub const MAX_SEARCH_RESULTS: usize = 10;

/// 搜索查询文本最大字符数，超出部分截断
pub const MAX_SEARCH_QUERY_CHARS: usize = 200;

/// 新建主题的初始使用次数
pub const INITIAL_SEARCH_COUNT: u64 = 1;

/// 对外暴露的通用失败提示
pub const GENERIC_FAILURE_MESSAGE: &str = "Unable to generate explanation. Please try again.";
