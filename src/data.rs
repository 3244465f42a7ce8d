//! The fixed sample data set seeded in memory at startup and discarded on
//! exit. Nothing here is persisted.

use crate::models::comment::{Comment, Reply};
use crate::models::post::Post;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid sample date")
}

pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "Getting Started with React and TypeScript".to_string(),
            excerpt: "Learn how to build modern web applications with React and TypeScript. \
                      This comprehensive guide covers everything from setup to deployment."
                .to_string(),
            content: "React and TypeScript make a powerful combination for building modern web \
                      applications. In this post, we'll explore how to set up a project, create \
                      components, and leverage TypeScript's type safety.\n\n\
                      ## Why React + TypeScript?\n\n\
                      TypeScript brings static typing to JavaScript, which helps catch errors \
                      early in development and provides better IDE support. When combined with \
                      React, it creates a robust development experience.\n\n\
                      ## Getting Started\n\n\
                      First, create a new React project with TypeScript:\n\n\
                      ```bash\nnpx create-react-app my-app --template typescript\n```\n\n\
                      This sets up everything you need to start building with React and \
                      TypeScript.\n\n\
                      The beauty of TypeScript is that it will catch type errors at compile \
                      time, making your code more reliable."
                .to_string(),
            author: "John Doe".to_string(),
            date: date(2024, 6, 15),
            likes: 42,
            comment_count: 8,
            tags: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Web Development".to_string(),
            ],
            featured: true,
            image: Some(
                "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800&h=400&fit=crop"
                    .to_string(),
            ),
        },
        Post {
            id: 2,
            title: "The Future of Web Development".to_string(),
            excerpt: "Exploring emerging trends and technologies that are shaping the future of \
                      web development in 2024 and beyond."
                .to_string(),
            content: "The web development landscape is constantly evolving. Let's explore the \
                      trends that are shaping the future of how we build for the web.\n\n\
                      ## Key Trends\n\n\
                      1. **AI-Powered Development Tools**: Tools like GitHub Copilot are \
                      changing how we write code\n\
                      2. **Edge Computing**: Bringing computation closer to users for better \
                      performance\n\
                      3. **WebAssembly**: Running high-performance applications in the browser\n\
                      4. **Jamstack Architecture**: Static sites with dynamic functionality\n\n\
                      These trends are not just buzzwords - they're fundamental shifts in how \
                      we approach web development."
                .to_string(),
            author: "Jane Smith".to_string(),
            date: date(2024, 6, 12),
            likes: 35,
            comment_count: 12,
            tags: vec![
                "Future".to_string(),
                "Trends".to_string(),
                "Web Development".to_string(),
            ],
            featured: false,
            image: None,
        },
        Post {
            id: 3,
            title: "Building Accessible Web Applications".to_string(),
            excerpt: "A comprehensive guide to creating web applications that are accessible to \
                      all users, including those with disabilities."
                .to_string(),
            content: "Web accessibility ensures that websites and applications can be used by \
                      everyone, including people with disabilities. Here's how to build more \
                      accessible web applications.\n\n\
                      ## Core Principles\n\n\
                      The WCAG guidelines are built on four principles:\n\
                      - **Perceivable**: Information must be presentable in ways users can \
                      perceive\n\
                      - **Operable**: Interface components must be operable\n\
                      - **Understandable**: Information and UI operation must be \
                      understandable\n\
                      - **Robust**: Content must be robust enough to be interpreted by \
                      assistive technologies\n\n\
                      ## Practical Tips\n\n\
                      1. Use semantic HTML elements\n\
                      2. Provide alternative text for images\n\
                      3. Ensure keyboard navigation works\n\
                      4. Use sufficient color contrast\n\
                      5. Test with screen readers\n\n\
                      Building accessible applications isn't just the right thing to do - it \
                      often results in better UX for everyone."
                .to_string(),
            author: "Mike Johnson".to_string(),
            date: date(2024, 6, 10),
            likes: 28,
            comment_count: 6,
            tags: vec![
                "Accessibility".to_string(),
                "UX".to_string(),
                "Web Standards".to_string(),
            ],
            featured: false,
            image: None,
        },
    ]
}

pub fn sample_comments() -> Vec<Comment> {
    vec![
        Comment {
            id: 1,
            author: "Alice Johnson".to_string(),
            content: "Great article! This really helped me understand TypeScript better. The \
                      examples are clear and practical."
                .to_string(),
            date: date(2024, 6, 16),
            likes: 12,
            replies: vec![Reply {
                id: 2,
                author: "Bob Wilson".to_string(),
                content: "I agree! The code examples were particularly helpful.".to_string(),
                date: date(2024, 6, 16),
                likes: 3,
            }],
        },
        Comment {
            id: 3,
            author: "Charlie Brown".to_string(),
            content: "Thanks for sharing this. I've been struggling with TypeScript integration \
                      and this cleared up a lot of confusion."
                .to_string(),
            date: date(2024, 6, 15),
            likes: 8,
            replies: vec![],
        },
    ]
}
