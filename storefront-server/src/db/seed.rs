//! 启动种子数据
//!
//! 每个可种子化的集合 (products, blog_posts, faqs, testimonials) 在为空时写入固定数据。
//! 只按"是否为空"判断，不做 upsert；单实例部署下足够。

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::repository::{
    BlogRepository, FaqRepository, ProductRepository, RepoResult, TestimonialRepository,
};
use shared::models::{BlogPost, Faq, Product, ProductTier, Testimonial};
use shared::util::now_millis;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// 写入所有空集合，返回本次写入的记录数
pub async fn initialize(db: &Surreal<Db>) -> RepoResult<usize> {
    let now = now_millis();
    let mut inserted = 0;

    let products = ProductRepository::new(db.clone());
    if products.count().await? == 0 {
        for product in seed_products(now) {
            products.create(product).await?;
            inserted += 1;
        }
        tracing::info!("Seeded products collection");
    }

    let blog = BlogRepository::new(db.clone());
    if blog.count().await? == 0 {
        for post in seed_blog_posts(now) {
            blog.create(post).await?;
            inserted += 1;
        }
        tracing::info!("Seeded blog_posts collection");
    }

    let faqs = FaqRepository::new(db.clone());
    if faqs.count().await? == 0 {
        for faq in seed_faqs(now) {
            faqs.create(faq).await?;
            inserted += 1;
        }
        tracing::info!("Seeded faqs collection");
    }

    let testimonials = TestimonialRepository::new(db.clone());
    if testimonials.count().await? == 0 {
        for testimonial in seed_testimonials(now) {
            testimonials.create(testimonial).await?;
            inserted += 1;
        }
        tracing::info!("Seeded testimonials collection");
    }

    Ok(inserted)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn seed_products(now: i64) -> Vec<Product> {
    vec![
        Product {
            id: "sqr400-v58-lite".into(),
            name: "SQR400 v5.8 Lite".into(),
            version: "5.8".into(),
            tier: ProductTier::Lite,
            price: 1200.0,
            original_price: 1500.0,
            currency: "USD".into(),
            btc_price: 0.018,
            description: "Entry edition with the core toolset for single-seat use.".into(),
            features: strings(&[
                "Core feature set",
                "Standard encryption",
                "Guided setup",
                "Email support",
                "30-day refund window",
            ]),
            limitations: strings(&["Single seat", "No scripting API"]),
            badge: "Most Popular".into(),
            in_stock: true,
            created_at: now,
            updated_at: now,
        },
        Product {
            id: "sqr400-v58-pro".into(),
            name: "SQR400 v5.8 Pro".into(),
            version: "5.8".into(),
            tier: ProductTier::Pro,
            price: 2000.0,
            original_price: 2500.0,
            currency: "USD".into(),
            btc_price: 0.030,
            description: "Professional edition with automation and priority support.".into(),
            features: strings(&[
                "Everything in Lite",
                "Scripting API",
                "Batch processing",
                "Priority support",
                "Lifetime updates",
            ]),
            limitations: strings(&["Up to 3 seats"]),
            badge: "Professional".into(),
            in_stock: true,
            created_at: now + 1,
            updated_at: now + 1,
        },
        Product {
            id: "sqr400-v784".into(),
            name: "SQR400 v7.8.4".into(),
            version: "7.8.4".into(),
            tier: ProductTier::Ultimate,
            price: 2500.0,
            original_price: 3000.0,
            currency: "USD".into(),
            btc_price: 0.037,
            description: "Latest release with the full feature set and early access builds."
                .into(),
            features: strings(&[
                "Everything in Pro",
                "Unlimited seats",
                "Early access builds",
                "Dedicated support channel",
                "Lifetime updates + beta access",
            ]),
            limitations: vec![],
            badge: "Latest Version".into(),
            in_stock: true,
            created_at: now + 2,
            updated_at: now + 2,
        },
    ]
}

pub fn seed_blog_posts(now: i64) -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".into(),
            title: "What is SQR400? A Complete Guide".into(),
            slug: "what-is-sqr400-complete-guide".into(),
            excerpt: "An overview of the product line, its editions and who each one is for."
                .into(),
            content: "SQR400 ships in three editions. This guide walks through installation, \
                      licensing and the differences between Lite, Pro and the 7.8.4 release."
                .into(),
            author: "Tech Team".into(),
            publish_date: now - 30 * DAY_MS,
            read_time: "8 min read".into(),
            tags: strings(&["sqr400", "guide", "security"]),
            featured: true,
            published: true,
            created_at: now,
            updated_at: now,
        },
        BlogPost {
            id: "2".into(),
            title: "SQR400 vs the Competition".into(),
            slug: "sqr400-vs-competition-market-leader".into(),
            excerpt: "How the editions compare with alternatives on features and price.".into(),
            content: "We compared SQR400 with other tools in the category on setup time, \
                      feature coverage, update cadence and support responsiveness."
                .into(),
            author: "Product Analyst".into(),
            publish_date: now - 15 * DAY_MS,
            read_time: "12 min read".into(),
            tags: strings(&["comparison", "market analysis", "sqr400"]),
            featured: true,
            published: true,
            created_at: now + 1,
            updated_at: now + 1,
        },
        BlogPost {
            id: "3".into(),
            title: "SQR400 Version History".into(),
            slug: "sqr400-version-history-evolution".into(),
            excerpt: "From 5.8 to 7.8.4: what changed in each release.".into(),
            content: "Release 5.8 introduced the edition split. Release 7.8.4 added the \
                      scripting API improvements and the early access channel."
                .into(),
            author: "Development Team".into(),
            publish_date: now - 5 * DAY_MS,
            read_time: "6 min read".into(),
            tags: strings(&["versions", "updates", "features"]),
            featured: false,
            published: true,
            created_at: now + 2,
            updated_at: now + 2,
        },
    ]
}

pub fn seed_faqs(now: i64) -> Vec<Faq> {
    let items = [
        (
            "1",
            "Is using SQR400 legal?",
            "SQR400 is intended for authorized testing and education. You are responsible \
             for complying with local laws and for having permission on every system you use it on.",
            "legal",
        ),
        (
            "2",
            "How do I pay for a license?",
            "Place an order, send the BTC amount shown at checkout to the payment address, \
             then use the payment check on the order page. The download unlocks once payment is confirmed.",
            "purchase",
        ),
        (
            "3",
            "How reliable is it?",
            "Each release goes through automated and manual testing before it ships. \
             Results depend on your environment and configuration.",
            "effectiveness",
        ),
        (
            "4",
            "What is the difference between the editions?",
            "Lite covers the core features for one seat, Pro adds automation and priority \
             support, and 7.8.4 includes everything plus early access builds.",
            "features",
        ),
        (
            "5",
            "What support is included?",
            "All editions include email support. Pro and 7.8.4 customers get priority handling.",
            "support",
        ),
        (
            "6",
            "How long is the download link valid?",
            "Download links expire 24 hours after they are issued. You can request a new \
             link from the order page while the order stays confirmed.",
            "support",
        ),
    ];

    items
        .iter()
        .enumerate()
        .map(|(i, (id, question, answer, category))| Faq {
            id: id.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            category: category.to_string(),
            order: i as i32 + 1,
            published: true,
            created_at: now + i as i64,
            updated_at: now + i as i64,
        })
        .collect()
}

pub fn seed_testimonials(now: i64) -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "1".into(),
            name: "Michael Chen".into(),
            role: "Systems Analyst".into(),
            company: "Northwind Labs".into(),
            rating: 5,
            comment: "Setup took minutes and the documentation answered every question we had."
                .into(),
            avatar: "MC".into(),
            verified: true,
            date: now - 20 * DAY_MS,
            created_at: now,
        },
        Testimonial {
            id: "2".into(),
            name: "Sarah Williams".into(),
            role: "Security Researcher".into(),
            company: "Contoso Research".into(),
            rating: 5,
            comment: "The Pro edition's scripting API saved our team hours every week.".into(),
            avatar: "SW".into(),
            verified: true,
            date: now - 10 * DAY_MS,
            created_at: now + 1,
        },
        Testimonial {
            id: "3".into(),
            name: "David Rodriguez".into(),
            role: "IT Specialist".into(),
            company: "Independent".into(),
            rating: 4,
            comment: "Solid tool. Support replied within a day when I hit a licensing question."
                .into(),
            avatar: "DR".into(),
            verified: true,
            date: now - 3 * DAY_MS,
            created_at: now + 2,
        },
    ]
}
