//! Vocabulary: the fixed dictionaries a JD is scanned against.
//!
//! Two ordered term lists: technical keywords and position/role keywords.
//! Terms are stored lowercase; scan order is list order.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Technical and domain terms, grouped the way the CMS presents skills.
const TECH_KEYWORDS: &[&str] = &[
    // Frontend
    "react", "react native", "vue", "angular", "svelte", "javascript", "typescript",
    "html", "css", "tailwind", "next.js", "nuxt", "webpack", "vite", "小程序", "前端工程化",
    // Backend
    "node.js", "java", "spring", "go", "golang", "python", "django", "flask", "rust", "c++",
    "graphql", "restful", "grpc", "微服务", "分布式", "高并发",
    // Databases
    "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "sqlite", "supabase", "sql",
    // Cloud / DevOps
    "docker", "kubernetes", "k8s", "aws", "azure", "阿里云", "ci/cd", "linux", "nginx",
    "serverless", "云原生", "devops",
    // Data / AI
    "机器学习", "深度学习", "人工智能", "大模型", "tensorflow", "pytorch", "llm", "nlp",
    "aigc", "数据分析", "推荐系统",
    // General engineering
    "git", "agile", "敏捷", "tdd", "单元测试", "性能优化", "架构设计", "系统设计", "算法",
];

/// Role and seniority terms.
const POSITION_KEYWORDS: &[&str] = &[
    "前端", "后端", "全栈", "架构师", "产品经理", "项目经理", "技术负责人", "技术总监",
    "工程师", "开发", "测试", "运维", "算法工程师", "数据分析师", "高级", "资深", "专家",
    "frontend", "backend", "full stack", "fullstack", "architect", "engineer", "developer",
    "tech lead", "product manager", "senior", "principal",
];

/// An immutable pair of term lists used as the matching dictionary.
///
/// Build one at startup and share it; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "VocabularyFile")]
pub struct Vocabulary {
    keywords: Vec<String>,
    positions: Vec<String>,
}

/// On-disk shape: `{"keywords": [...], "positions": [...]}`.
#[derive(Deserialize)]
struct VocabularyFile {
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    positions: Vec<String>,
}

impl From<VocabularyFile> for Vocabulary {
    fn from(file: VocabularyFile) -> Self {
        Vocabulary::new(file.keywords, file.positions)
    }
}

impl Vocabulary {
    /// Lowercases and trims every term, drops empty terms and keeps the first
    /// occurrence of duplicates.
    pub fn new<K, P>(keywords: K, positions: P) -> Self
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        Self {
            keywords: normalize_terms(keywords),
            positions: normalize_terms(positions),
        }
    }

    /// The curated dictionary shipped with the crate.
    pub fn builtin() -> &'static Vocabulary {
        static BUILTIN: OnceLock<Vocabulary> = OnceLock::new();
        BUILTIN.get_or_init(|| Vocabulary::new(TECH_KEYWORDS, POSITION_KEYWORDS))
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn positions(&self) -> &[String] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.keywords.len() + self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.positions.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

fn normalize_terms<I>(terms: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = HashSet::new();
    terms
        .into_iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.clone()))
        .collect()
}
