//! Static site content: the course catalog and testimonial data.

use serde::{Deserialize, Serialize};

use crate::catalog::Course;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub program: String,
    pub quote: String,
    pub rating: u8,
}

fn course(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    instructor: &str,
    duration_weeks: u8,
    price_usd: u32,
    students: u32,
    rating: f32,
) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        instructor: instructor.to_string(),
        duration_weeks,
        price_usd,
        students,
        rating,
    }
}

/// The full catalog shown on the courses page.
pub fn all_courses() -> Vec<Course> {
    vec![
        course(
            "1",
            "Computer Science Fundamentals",
            "Master programming languages, algorithms, and software development principles with hands-on projects.",
            "Technology",
            "Dr. Sarah Chen",
            16,
            2999,
            1250,
            4.8,
        ),
        course(
            "2",
            "Business Administration",
            "Develop leadership skills and business acumen for modern enterprises in the digital age.",
            "Business",
            "Prof. Michael Johnson",
            20,
            3499,
            980,
            4.9,
        ),
        course(
            "3",
            "Digital Marketing Strategy",
            "Learn modern marketing techniques, SEO, social media marketing, and digital campaign management.",
            "Marketing",
            "Lisa Rodriguez",
            12,
            1999,
            756,
            4.7,
        ),
        course(
            "4",
            "Data Science & Analytics",
            "Analyze complex data sets and build predictive models using Python, R, and machine learning.",
            "Technology",
            "Dr. James Wilson",
            18,
            3299,
            634,
            4.9,
        ),
        course(
            "5",
            "Graphic Design & UI/UX",
            "Create stunning visual designs and user interfaces using industry-standard tools and techniques.",
            "Design",
            "Emma Thompson",
            14,
            2499,
            892,
            4.6,
        ),
        course(
            "6",
            "Financial Management",
            "Master corporate finance, investment analysis, and financial planning strategies.",
            "Business",
            "Robert Kim",
            16,
            2799,
            567,
            4.8,
        ),
        course(
            "7",
            "Web Development Bootcamp",
            "Full-stack web development with React, Node.js, and modern web technologies.",
            "Technology",
            "Alex Rodriguez",
            24,
            4299,
            1100,
            4.9,
        ),
        course(
            "8",
            "Healthcare Administration",
            "Learn healthcare management, policy, and administration in modern medical facilities.",
            "Healthcare",
            "Dr. Maria Garcia",
            20,
            3199,
            445,
            4.7,
        ),
        course(
            "9",
            "Creative Writing",
            "Develop your storytelling skills in fiction, non-fiction, and digital content creation.",
            "Arts",
            "Prof. David Miller",
            10,
            1499,
            324,
            4.5,
        ),
    ]
}

/// The four courses featured on the home page.
pub fn featured_courses() -> Vec<Course> {
    all_courses()
        .into_iter()
        .filter(|c| matches!(c.id.as_str(), "1" | "2" | "3" | "4"))
        .collect()
}

pub fn testimonials() -> Vec<Testimonial> {
    let entry = |name: &str, program: &str, quote: &str| Testimonial {
        name: name.to_string(),
        program: program.to_string(),
        quote: quote.to_string(),
        rating: 5,
    };
    vec![
        entry(
            "Emily Johnson",
            "Computer Science Graduate",
            "EduVerse transformed my career. The hands-on approach and expert faculty helped me land my dream job at a top tech company.",
        ),
        entry(
            "Marcus Chen",
            "Business Administration",
            "The practical knowledge and networking opportunities I gained here were invaluable for starting my own business.",
        ),
        entry(
            "Sarah Williams",
            "Digital Marketing",
            "The curriculum is cutting-edge and the professors bring real-world experience to every lesson.",
        ),
        entry(
            "David Rodriguez",
            "Data Science",
            "From zero programming knowledge to data scientist in 18 weeks. The support system here is incredible.",
        ),
    ]
}
