//! # 示例项目数据服务
//!
//! 提供固定的示例项目集（fixture），用于两个场景：
//! - **列表页降级**：后端不可达或返回错误时，列表页用完整示例集替换，
//!   保证页面永远有内容（"never show an empty screen" 策略）
//! - **首页精选**：首页的精选项目区始终渲染示例集的前 3 项，不请求后端
//!
//! 示例数据是展示用的固定值，不做任何计算或随机化，
//! 内容与前端历史版本中硬编码的项目一致。

use crate::models::project::Project;

/// 首页精选项目数量
const FEATURED_COUNT: usize = 3;

/// 返回完整的示例项目集（5 项，顺序固定）
///
/// 每次调用构造一组新值；示例数据不跨调用共享，
/// 调用方可以安全地拥有并传递它。
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Movie Database".to_string(),
            description: "A popcorn-worthy movie explorer using TMDB API.".to_string(),
            image_url: "/placeholder.png".to_string(),
            tags: vec!["React".to_string(), "API".to_string(), "Tailwind".to_string()],
            link: "#".to_string(),
            github_link: Some("#".to_string()),
        },
        Project {
            id: 2,
            title: "Snack E-commerce".to_string(),
            description: "Order your favorite movie snacks online.".to_string(),
            image_url: "/placeholder.png".to_string(),
            tags: vec!["Next.js".to_string(), "Stripe".to_string(), "Zustand".to_string()],
            link: "#".to_string(),
            github_link: Some("#".to_string()),
        },
        Project {
            id: 3,
            title: "Cinema Booking".to_string(),
            description: "Book tickets for the latest blockbusters.".to_string(),
            image_url: "/placeholder.png".to_string(),
            tags: vec![
                "TypeScript".to_string(),
                "PostgreSQL".to_string(),
                "Prisma".to_string(),
            ],
            link: "#".to_string(),
            github_link: Some("#".to_string()),
        },
        Project {
            id: 4,
            title: "Popcorn Clicker".to_string(),
            description: "An addictive idle game about popping corn.".to_string(),
            image_url: "/placeholder.png".to_string(),
            tags: vec![
                "GameDev".to_string(),
                "Canvas".to_string(),
                "JavaScript".to_string(),
            ],
            link: "#".to_string(),
            github_link: Some("#".to_string()),
        },
        Project {
            id: 5,
            title: "Portfolio v1".to_string(),
            description: "My previous portfolio site.".to_string(),
            image_url: "/placeholder.png".to_string(),
            tags: vec!["HTML".to_string(), "CSS".to_string(), "jQuery".to_string()],
            link: "#".to_string(),
            github_link: Some("#".to_string()),
        },
    ]
}

/// 返回首页精选项目（示例集的前 3 项）
pub fn featured_projects() -> Vec<Project> {
    sample_projects().into_iter().take(FEATURED_COUNT).collect()
}
