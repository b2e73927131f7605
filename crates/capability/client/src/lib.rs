//! # 后端资源客户端
//!
//! 为用户、组织、电力对象、技术条件提供类型化的请求/响应封装。
//!
//! ## 模块说明
//!
//! - [`traits`]：资源接口（AuthApi、UserApi、OrganizationApi、ObjectApi、TechnicalConditionApi）
//! - [`http`]：reqwest 实现，对接真实后端
//! - [`in_memory`]：内存实现（测试与本地演示），内置 admin 账户
//! - [`cache`]：按“实体 + 过滤参数”键控的查询缓存
//! - [`resources`]：带缓存的访问层，写操作成功后失效对应实体
//! - [`error`]：统一的客户端错误
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tc_client::{HttpBackend, Resources};
//! use api_contract::TcListQuery;
//!
//! let backend = HttpBackend::new("http://localhost:8080/api")?.with_token(Some(token));
//! let resources = Resources::new(Arc::new(backend));
//! let permits = resources.technical_conditions(TcListQuery::default()).await?;
//! ```

pub mod cache;
pub mod error;
pub mod http;
pub mod in_memory;
pub mod resources;
pub mod traits;

pub use cache::{QueryCache, QueryKey};
pub use error::ClientError;
pub use http::HttpBackend;
pub use in_memory::InMemoryBackend;
pub use resources::Resources;
pub use traits::*;
