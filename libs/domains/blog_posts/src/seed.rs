//! Sample posts inserted into an empty blog collection.

use chrono::{DateTime, Duration, Utc};

use crate::models::{BlogPost, BlogPostCreate};

pub const SAMPLE_AUTHOR: &str = "Datxoc Team";

struct SamplePost {
    title: &'static str,
    excerpt: &'static str,
    content: &'static str,
    date: &'static str,
    read_time: &'static str,
    category: &'static str,
}

const SAMPLE_POSTS: [SamplePost; 3] = [
    SamplePost {
        title: "The Future of AI in Business Automation",
        excerpt: "Exploring how artificial intelligence is revolutionizing business processes and driving efficiency across industries.",
        content: "Artificial Intelligence (AI) is no longer a futuristic concept—it's a present reality that's transforming how businesses operate. From automating routine tasks to providing intelligent insights, AI is becoming an essential tool for companies looking to stay competitive in today's fast-paced market.",
        date: "2024-01-15",
        read_time: "8 min read",
        category: "AI Strategy",
    },
    SamplePost {
        title: "Machine Learning Implementation Best Practices",
        excerpt: "A comprehensive guide to successfully implementing machine learning solutions in your organization.",
        content: "Implementing machine learning (ML) in your organization requires careful planning, the right tools, and a clear understanding of your business objectives. This guide will walk you through the essential steps to ensure your ML project succeeds.",
        date: "2024-01-10",
        read_time: "12 min read",
        category: "Machine Learning",
    },
    SamplePost {
        title: "Data Quality: The Foundation of Successful AI Projects",
        excerpt: "Why data quality is crucial for AI success and how to ensure your data is ready for machine learning.",
        content: "The success of any AI or machine learning project heavily depends on the quality of the data used to train the models. Poor data quality can lead to inaccurate predictions, biased results, and ultimately, project failure.",
        date: "2024-01-05",
        read_time: "6 min read",
        category: "Data Science",
    },
];

/// Build the sample posts as of `now`.
///
/// Each post is stamped one millisecond before the previous one, so a
/// newest-first read returns them in the order listed here.
pub fn sample_posts(now: DateTime<Utc>) -> Vec<BlogPost> {
    SAMPLE_POSTS
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            let input = BlogPostCreate {
                title: sample.title.to_string(),
                excerpt: sample.excerpt.to_string(),
                content: Some(sample.content.to_string()),
                author: SAMPLE_AUTHOR.to_string(),
                date: sample.date.to_string(),
                read_time: sample.read_time.to_string(),
                category: sample.category.to_string(),
                published: true,
            };
            BlogPost::with_timestamp(input, now - Duration::milliseconds(index as i64))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_published_posts_by_the_team() {
        let posts = sample_posts(Utc::now());

        assert_eq!(posts.len(), 3);
        assert!(posts.iter().all(|p| p.published && p.author == SAMPLE_AUTHOR));
        assert!(posts.iter().all(|p| p.content.is_some()));
    }

    #[test]
    fn test_categories_and_dates() {
        let posts = sample_posts(Utc::now());
        let summary: Vec<_> = posts
            .iter()
            .map(|p| (p.category.as_str(), p.date.as_str(), p.read_time.as_str()))
            .collect();

        assert_eq!(
            summary,
            [
                ("AI Strategy", "2024-01-15", "8 min read"),
                ("Machine Learning", "2024-01-10", "12 min read"),
                ("Data Science", "2024-01-05", "6 min read"),
            ]
        );
    }

    #[test]
    fn test_timestamps_strictly_descend_in_list_order() {
        let now = Utc::now();
        let posts = sample_posts(now);

        assert_eq!(posts[0].timestamp, now);
        assert!(posts.windows(2).all(|w| w[0].timestamp > w[1].timestamp));
    }

    #[test]
    fn test_each_post_gets_its_own_id() {
        let posts = sample_posts(Utc::now());
        assert_ne!(posts[0].id, posts[1].id);
        assert_ne!(posts[1].id, posts[2].id);
    }
}
