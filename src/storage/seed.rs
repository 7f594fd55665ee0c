use crate::db::models::Post;

struct SeedPost {
    id: i64,
    title: &'static str,
    excerpt: &'static str,
    content: &'static str,
    category: &'static str,
    author: &'static str,
    author_role: &'static str,
    author_avatar: &'static str,
    image: &'static str,
    date: &'static str,
    read_time: &'static str,
    tags: &'static [&'static str],
}

const SEED_POSTS: &[SeedPost] = &[
    SeedPost {
        id: 1,
        title: "The Future of Web Assembly",
        excerpt: "Exploring how WASM is radically changing browser performance benchmarks.",
        content: "Web design is in a constant state of flux...",
        category: "Dev",
        author: "Elena Rodriguez",
        author_role: "Senior Engineer",
        author_avatar: "https://ui-avatars.com/api/?name=Elena+Rodriguez&background=6366f1&color=fff&size=128",
        image: "https://images.unsplash.com/photo-1518770660439-4636190af475?w=800",
        date: "Oct 26, 2023",
        read_time: "5 min read",
        tags: &["Technology", "WebAssembly"],
    },
    SeedPost {
        id: 2,
        title: "Design Systems 101",
        excerpt: "Building consistent UIs at scale isn't just about components; it's about communication.",
        content: "A design system is a collection of reusable components...",
        category: "Design",
        author: "Sarah Jenkins",
        author_role: "Product Designer",
        author_avatar: "https://ui-avatars.com/api/?name=Sarah+Jenkins&background=6366f1&color=fff&size=128",
        image: "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=600",
        date: "Oct 24, 2023",
        read_time: "5 min read",
        tags: &["Design", "UI/UX"],
    },
    SeedPost {
        id: 3,
        title: "React vs Vue in 2024",
        excerpt: "A comprehensive framework comparison for modern frontend teams.",
        content: "Both React and Vue have their strengths...",
        category: "Dev",
        author: "Mike Ross",
        author_role: "Frontend Developer",
        author_avatar: "https://ui-avatars.com/api/?name=Mike+Ross&background=6366f1&color=fff&size=128",
        image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=600",
        date: "Oct 22, 2023",
        read_time: "8 min read",
        tags: &["React", "Vue", "JavaScript"],
    },
];

/// The example articles written to an empty store, newest first.
pub fn default_posts() -> Vec<Post> {
    SEED_POSTS
        .iter()
        .map(|seed| Post {
            id: seed.id,
            title: seed.title.to_string(),
            excerpt: seed.excerpt.to_string(),
            content: seed.content.to_string(),
            category: seed.category.to_string(),
            author: seed.author.to_string(),
            author_role: seed.author_role.to_string(),
            author_avatar: seed.author_avatar.to_string(),
            image: seed.image.to_string(),
            date: seed.date.to_string(),
            read_time: seed.read_time.to_string(),
            tags: seed.tags.iter().map(|t| t.to_string()).collect(),
        })
        .collect()
}
