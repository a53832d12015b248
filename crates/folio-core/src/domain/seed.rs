//! Posts written when the blog document does not exist yet.

use chrono::{DateTime, Utc};

use super::{BlogDocument, Post};

const AUTHOR: &str = "Md Magfur Alam";

/// The initial document: three published sample posts, newest first.
pub fn seed_document() -> BlogDocument {
    BlogDocument::new(vec![
        seed_post(
            "1",
            "Building Modern Web Applications with Next.js 14",
            "Explore the latest features in Next.js 14 and how they can revolutionize your web development workflow. From App Router to Server Components, discover what makes Next.js the go-to framework for modern React applications.",
            "Next.js 14 has introduced groundbreaking features that are reshaping how we build web applications. In this comprehensive guide, we'll explore the App Router, Server Components, and the new streaming capabilities.\n\nThe App Router represents a paradigm shift in how we structure Next.js applications. Unlike the traditional Pages Router, the App Router leverages React's latest features including Server Components, Suspense, and streaming.\n\nServer Components allow us to render components on the server, reducing the JavaScript bundle size sent to the client. This results in faster initial page loads and better performance overall.\n\nStreaming enables us to progressively render parts of the page as they become ready, providing a better user experience with faster perceived loading times.\n\nKey benefits of Next.js 14:\n- Improved performance with Server Components\n- Better developer experience with the App Router\n- Enhanced SEO capabilities\n- Automatic code splitting and optimization\n- Built-in TypeScript support\n\nWhether you're building a simple blog or a complex e-commerce platform, Next.js 14 provides the tools and optimizations needed to create exceptional web experiences.",
            "2024-01-15T10:00:00.000Z",
            "8 min read",
            &["Next.js", "React", "Web Development", "JavaScript"],
            "/placeholder.svg?height=400&width=600&text=Next.js+14",
        ),
        seed_post(
            "2",
            "Mastering TypeScript: Advanced Patterns and Best Practices",
            "Dive deep into advanced TypeScript patterns that will make your code more robust, maintainable, and type-safe. Learn about utility types, conditional types, and advanced generics.",
            "TypeScript has become an essential tool for modern JavaScript development, providing static type checking and enhanced developer experience. In this article, we'll explore advanced patterns that can elevate your TypeScript skills.\n\nUtility Types are powerful built-in types that help transform existing types. Some of the most useful ones include:\n\n- Partial<T>: Makes all properties optional\n- Required<T>: Makes all properties required\n- Pick<T, K>: Creates a type with selected properties\n- Omit<T, K>: Creates a type without specified properties\n- Record<K, T>: Creates an object type with specific keys and values\n\nConditional Types allow you to create types that depend on conditions. They follow the pattern T extends U ? X : Y, enabling powerful type transformations.\n\nAdvanced Generics can make your functions and classes more flexible and reusable. By using constraints, default parameters, and mapped types, you can create sophisticated type definitions.\n\nBest Practices:\n- Use strict mode for better type safety\n- Leverage type guards for runtime type checking\n- Implement proper error handling with Result types\n- Use branded types for domain-specific values\n- Apply the principle of least privilege with readonly modifiers\n\nBy mastering these advanced patterns, you'll write more maintainable and bug-free TypeScript code.",
            "2024-01-10T14:30:00.000Z",
            "12 min read",
            &["TypeScript", "JavaScript", "Programming", "Best Practices"],
            "/placeholder.svg?height=400&width=600&text=TypeScript+Advanced",
        ),
        seed_post(
            "3",
            "The Future of Frontend Development: Trends to Watch in 2024",
            "Explore the emerging trends and technologies that are shaping the future of frontend development. From AI-powered tools to new frameworks, discover what's coming next.",
            "The frontend development landscape is constantly evolving, with new tools, frameworks, and methodologies emerging regularly. As we progress through 2024, several key trends are shaping the future of how we build user interfaces.\n\nAI-Powered Development Tools are revolutionizing how we write code. Tools like GitHub Copilot, Tabnine, and ChatGPT are helping developers write code faster and with fewer bugs. These tools can generate boilerplate code, suggest optimizations, and even help with debugging.\n\nMicro-Frontends are gaining traction as organizations look to scale their frontend applications. This architectural approach allows teams to work independently on different parts of an application, improving development velocity and maintainability.\n\nWeb Assembly (WASM) is enabling high-performance applications in the browser. Languages like Rust, C++, and Go can now run in the browser with near-native performance, opening up new possibilities for web applications.\n\nEdge Computing is bringing computation closer to users, reducing latency and improving performance. Frameworks like Next.js and Remix are embracing edge deployment, making it easier to build fast, globally distributed applications.\n\nSustainable Web Development is becoming increasingly important. Developers are focusing on creating more efficient, environmentally friendly websites that consume less energy and resources.\n\nKey trends to watch:\n- Progressive Web Apps (PWAs) becoming mainstream\n- Increased adoption of TypeScript\n- Growth of headless CMS solutions\n- Enhanced focus on web accessibility\n- Rise of no-code/low-code platforms\n\nStaying ahead of these trends will help you build better, more efficient, and more user-friendly applications.",
            "2024-01-05T09:15:00.000Z",
            "10 min read",
            &["Frontend", "Trends", "Web Development", "Technology"],
            "/placeholder.svg?height=400&width=600&text=Frontend+Trends+2024",
        ),
    ])
}

#[allow(clippy::too_many_arguments)]
fn seed_post(
    id: &str,
    title: &str,
    excerpt: &str,
    content: &str,
    date: &str,
    read_time: &str,
    tags: &[&str],
    image: &str,
) -> Post {
    Post {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        author: AUTHOR.to_string(),
        date: date.parse::<DateTime<Utc>>().unwrap_or_default(),
        read_time: read_time.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image: Some(image.to_string()),
        published: true,
        extra: Default::default(),
    }
}
