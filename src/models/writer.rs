use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 写手记录（`GET /api/writers` 返回的元素）
///
/// 单条记录里的 null 或缺失字段按空值处理，不影响整个列表的解析
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Writer {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub college_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub branch: String,
    #[serde(default)]
    pub rate_per_ten_pages: Rate,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// 每 10 页的价格
///
/// 后端的 numeric 列可能被序列化为字符串，这里两种形式都接受并原样展示；
/// null 或缺失时为 [`Rate::Missing`]，展示为空
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rate {
    Number(serde_json::Number),
    Text(String),
    #[default]
    Missing,
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // 20.0 显示为 20
            Rate::Number(n) if n.is_f64() => match n.as_f64() {
                Some(value) => write!(f, "{}", value),
                None => write!(f, "{}", n),
            },
            Rate::Number(n) => write!(f, "{}", n),
            Rate::Text(s) => write!(f, "{}", s),
            Rate::Missing => Ok(()),
        }
    }
}

impl fmt::Display for Writer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} | {} | {} | ${} per 10 pages | {}",
            self.first_name,
            self.last_name,
            self.college_name,
            self.branch,
            self.rate_per_ten_pages,
            self.email
        )
    }
}

/// 写手列表的筛选条件
///
/// 空字符串等同于不筛选
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriterFilter {
    pub college: Option<String>,
    pub branch: Option<String>,
}

impl WriterFilter {
    pub fn new(college: &str, branch: &str) -> Self {
        Self {
            college: non_empty(college),
            branch: non_empty(branch),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.college.is_none() && self.branch.is_none()
    }

    /// 生成查询参数，只包含非空条件
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if let Some(college) = &self.college {
            pairs.push(("college", college.as_str()));
        }
        if let Some(branch) = &self.branch {
            pairs.push(("branch", branch.as_str()));
        }
        pairs
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// 筛选下拉框的可选项
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub colleges: Vec<String>,
    pub branches: Vec<String>,
}
