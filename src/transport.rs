//! HTTP传输层：负责单次GET抓取并规范化响应
//! 加密请求不校验证书（指纹识别场景下有意为之，保留该行为）

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config::GlobalConfig;
use crate::error::RswResult;
use crate::utils::HeaderConverter;

/// 规范化后的HTTP响应
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    /// 响应头（键已小写，同名取第一个非空值）
    pub headers: HashMap<String, String>,
    pub body: String,
}

/// HTTP传输器
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// 按配置构建传输器（超时与请求标识来自显式配置，不依赖全局状态）
    pub fn new(config: &GlobalConfig) -> RswResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout))
            .user_agent(config.user_agent.clone())
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Self { client })
    }

    /// 抓取单个URL
    /// 响应体按UTF-8有损解码，非法字节被替换而非报错
    pub async fn fetch(&self, url: &str) -> RswResult<HttpResponse> {
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        let headers = HeaderConverter::to_scan_headers(response.headers());
        let bytes = response.bytes().await?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        debug!(
            "抓取完成：URL={}，状态码={}，Header数={}，Body字节数={}",
            url,
            status,
            headers.len(),
            bytes.len()
        );

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
