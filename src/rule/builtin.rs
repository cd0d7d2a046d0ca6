//! 内置技术签名表
//! 新增技术 = 新增一个Signature条目；检测引擎不特判任何技术名
//! 单个签名内规则按声明顺序评估：Header → Meta → Body → ScriptSrc → LinkHref

use super::model::{Rule, Signature};

/// 内置签名表（签名顺序决定输出分组顺序，不影响检测正确性）
pub static BUILTIN: &[Signature] = &[
    Signature {
        name: "Apache",
        category: "Web Server",
        rules: &[Rule::Header {
            name: "Server",
            pattern: r"Apache[/\s]?([\d.]+)?",
            version_group: Some(1),
            confidence: None,
        }],
    },
    Signature {
        name: "nginx",
        category: "Web Server",
        rules: &[Rule::Header {
            name: "Server",
            pattern: r"nginx[/\s]?([\d.]+)?",
            version_group: Some(1),
            confidence: None,
        }],
    },
    Signature {
        name: "IIS",
        category: "Web Server",
        rules: &[Rule::Header {
            name: "Server",
            pattern: r"Microsoft-IIS[/\s]?([\d.]+)?",
            version_group: Some(1),
            confidence: None,
        }],
    },
    Signature {
        name: "LiteSpeed",
        category: "Web Server",
        rules: &[Rule::Header {
            name: "Server",
            pattern: r"LiteSpeed",
            version_group: None,
            confidence: None,
        }],
    },
    Signature {
        name: "WordPress",
        category: "CMS",
        rules: &[
            Rule::Meta {
                name: "generator",
                pattern: r"WordPress\s?([\d.]+)?",
                version_group: Some(1),
                confidence: None,
            },
            Rule::Body {
                pattern: r"wp-content",
                version_group: None,
                confidence: Some(80),
            },
            Rule::Body {
                pattern: r"wp-includes",
                version_group: None,
                confidence: Some(70),
            },
        ],
    },
    Signature {
        name: "Joomla",
        category: "CMS",
        rules: &[Rule::Meta {
            name: "generator",
            pattern: r"Joomla!?\s?([\d.]+)?",
            version_group: Some(1),
            confidence: None,
        }],
    },
    Signature {
        name: "Drupal",
        category: "CMS",
        rules: &[
            Rule::Meta {
                name: "generator",
                pattern: r"Drupal\s?([\d.]+)?",
                version_group: Some(1),
                confidence: None,
            },
            Rule::Body {
                pattern: r"/sites/(?:default|all)/files",
                version_group: None,
                confidence: Some(75),
            },
        ],
    },
    Signature {
        name: "jQuery",
        category: "JavaScript Library",
        rules: &[
            Rule::Body {
                pattern: r"jQuery\s*v?([\d.]+)",
                version_group: Some(1),
                confidence: None,
            },
            Rule::ScriptSrc {
                pattern: r"jquery[.-]?(\d+(?:\.\d+)*)?.*\.js",
                version_group: Some(1),
                confidence: None,
            },
        ],
    },
    Signature {
        name: "Bootstrap",
        category: "CSS Framework",
        rules: &[
            Rule::ScriptSrc {
                pattern: r"bootstrap[.-]?(\d+(?:\.\d+)*)?.*\.js",
                version_group: Some(1),
                confidence: None,
            },
            Rule::LinkHref {
                pattern: r"bootstrap[.-]?(\d+(?:\.\d+)*)?.*\.css",
                version_group: Some(1),
                confidence: None,
            },
        ],
    },
    Signature {
        name: "PHP",
        category: "Programming Language",
        rules: &[Rule::Header {
            name: "X-Powered-By",
            pattern: r"PHP[/\s]?([\d.]+)?",
            version_group: Some(1),
            confidence: None,
        }],
    },
    Signature {
        name: "Express",
        category: "Web Framework",
        rules: &[Rule::Header {
            name: "X-Powered-By",
            pattern: r"Express",
            version_group: None,
            confidence: Some(90),
        }],
    },
    Signature {
        name: "Next.js",
        category: "Web Framework",
        rules: &[
            Rule::Header {
                name: "X-Powered-By",
                pattern: r"Next\.js\s?([\d.]+)?",
                version_group: Some(1),
                confidence: None,
            },
            Rule::ScriptSrc {
                pattern: r"/_next/static/",
                version_group: None,
                confidence: Some(80),
            },
        ],
    },
    Signature {
        name: "Cloudflare",
        category: "CDN",
        rules: &[
            Rule::Header {
                name: "Server",
                pattern: r"cloudflare",
                version_group: None,
                confidence: Some(100),
            },
            // CF-Ray头存在即判定（恒真模式）
            Rule::Header {
                name: "CF-Ray",
                pattern: r".*",
                version_group: None,
                confidence: Some(100),
            },
        ],
    },
    Signature {
        name: "Google Analytics",
        category: "Analytics",
        rules: &[Rule::ScriptSrc {
            pattern: r"google-analytics\.com/|googletagmanager\.com/",
            version_group: None,
            confidence: None,
        }],
    },
];
