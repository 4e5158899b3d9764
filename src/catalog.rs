//! Reference dataset backing the directory, onboarding options and the
//! manager dashboard.
//!
//! Mock data standing in for a real catalog service; fixed for the
//! lifetime of the process. Artist categories are stored as category
//! identifiers, with display names living on [`Category`] only.

use chrono::NaiveDate;

use crate::models::{Artist, Category, Submission, SubmissionStatus};

/// Selectable locations
pub const LOCATIONS: &[&str] = &[
    "Mumbai, Maharashtra",
    "New Delhi, Delhi",
    "Bangalore, Karnataka",
    "Chennai, Tamil Nadu",
    "Kolkata, West Bengal",
    "Hyderabad, Telangana",
    "Pune, Maharashtra",
    "Ahmedabad, Gujarat",
    "Jaipur, Rajasthan",
    "Lucknow, Uttar Pradesh",
];

/// Selectable price-range labels
pub const PRICE_RANGES: &[&str] = &[
    "₹10,000 - ₹25,000",
    "₹25,000 - ₹50,000",
    "₹50,000 - ₹100,000",
    "₹100,000+",
];

/// Selectable spoken languages
pub const LANGUAGES: &[&str] = &[
    "Hindi",
    "English",
    "Tamil",
    "Telugu",
    "Marathi",
    "Gujarati",
    "Bengali",
    "Kannada",
    "Malayalam",
    "Punjabi",
];

/// Experience brackets offered in the onboarding form
pub const EXPERIENCE_LEVELS: &[&str] = &["0-2", "2-5", "5-10", "10+"];

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The four artist categories
pub fn categories() -> Vec<Category> {
    vec![
        Category {
            id: "singers".to_string(),
            name: "Singers".to_string(),
            icon: "🎤".to_string(),
            description: "Professional vocalists for all occasions".to_string(),
            count: 45,
        },
        Category {
            id: "dancers".to_string(),
            name: "Dancers".to_string(),
            icon: "💃".to_string(),
            description: "Classical and contemporary dance performers".to_string(),
            count: 32,
        },
        Category {
            id: "speakers".to_string(),
            name: "Speakers".to_string(),
            icon: "🎯".to_string(),
            description: "Motivational and keynote speakers".to_string(),
            count: 28,
        },
        Category {
            id: "djs".to_string(),
            name: "DJs".to_string(),
            icon: "🎧".to_string(),
            description: "Music directors and sound artists".to_string(),
            count: 38,
        },
    ]
}

/// The six-artist sample directory
pub fn sample_artists() -> Vec<Artist> {
    vec![
        Artist {
            id: "1".to_string(),
            name: "Aria Sharma".to_string(),
            categories: strings(&["singers"]),
            bio: "Classical Indian vocalist with 15+ years experience in Bollywood and traditional music."
                .to_string(),
            price_range: "₹25,000 - ₹50,000".to_string(),
            location: "Mumbai, Maharashtra".to_string(),
            languages: strings(&["Hindi", "English", "Marathi"]),
            image: "https://images.pexels.com/photos/1587927/pexels-photo-1587927.jpeg?auto=compress&cs=tinysrgb&w=500"
                .to_string(),
            featured: true,
            rating: 4.9,
            review_count: 127,
        },
        Artist {
            id: "2".to_string(),
            name: "Raj Patel".to_string(),
            categories: strings(&["djs"]),
            bio: "Electronic music producer and DJ specializing in wedding celebrations and corporate events."
                .to_string(),
            price_range: "₹15,000 - ₹35,000".to_string(),
            location: "Bangalore, Karnataka".to_string(),
            languages: strings(&["English", "Hindi", "Kannada"]),
            image: "https://images.pexels.com/photos/1763075/pexels-photo-1763075.jpeg?auto=compress&cs=tinysrgb&w=500"
                .to_string(),
            featured: false,
            rating: 4.7,
            review_count: 89,
        },
        Artist {
            id: "3".to_string(),
            name: "Meera Nair".to_string(),
            categories: strings(&["dancers"]),
            bio: "Bharatanatyam and contemporary dance artist with national award recognition."
                .to_string(),
            price_range: "₹20,000 - ₹40,000".to_string(),
            location: "Chennai, Tamil Nadu".to_string(),
            languages: strings(&["Tamil", "English", "Malayalam"]),
            image: "https://images.pexels.com/photos/1032110/pexels-photo-1032110.jpeg?auto=compress&cs=tinysrgb&w=500"
                .to_string(),
            featured: true,
            rating: 4.8,
            review_count: 156,
        },
        Artist {
            id: "4".to_string(),
            name: "Dr. Vikram Singh".to_string(),
            categories: strings(&["speakers"]),
            bio: "Leadership coach and corporate trainer with expertise in team building and motivation."
                .to_string(),
            price_range: "₹50,000 - ₹100,000".to_string(),
            location: "New Delhi, Delhi".to_string(),
            languages: strings(&["English", "Hindi", "Punjabi"]),
            image: "https://images.pexels.com/photos/2182970/pexels-photo-2182970.jpeg?auto=compress&cs=tinysrgb&w=500"
                .to_string(),
            featured: false,
            rating: 4.9,
            review_count: 203,
        },
        Artist {
            id: "5".to_string(),
            name: "Sanya Malhotra".to_string(),
            categories: strings(&["singers", "dancers"]),
            bio: "Multi-talented performer specializing in fusion of Indian classical and western styles."
                .to_string(),
            price_range: "₹30,000 - ₹60,000".to_string(),
            location: "Pune, Maharashtra".to_string(),
            languages: strings(&["Hindi", "English", "Gujarati"]),
            image: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=500"
                .to_string(),
            featured: true,
            rating: 4.8,
            review_count: 94,
        },
        Artist {
            id: "6".to_string(),
            name: "Arjun Reddy".to_string(),
            categories: strings(&["djs"]),
            bio: "Techno and house music specialist with international festival experience."
                .to_string(),
            price_range: "₹20,000 - ₹45,000".to_string(),
            location: "Hyderabad, Telangana".to_string(),
            languages: strings(&["English", "Telugu", "Hindi"]),
            image: "https://images.pexels.com/photos/1054713/pexels-photo-1054713.jpeg?auto=compress&cs=tinysrgb&w=500"
                .to_string(),
            featured: false,
            rating: 4.6,
            review_count: 67,
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("static dataset date is a valid calendar day")
}

/// The five artist submissions seeding the manager dashboard
pub fn sample_submissions() -> Vec<Submission> {
    vec![
        Submission {
            id: "1".to_string(),
            name: "Priya Sharma".to_string(),
            category: "Singer".to_string(),
            city: "Mumbai".to_string(),
            fee: "₹35,000".to_string(),
            submitted_at: date(2025, 1, 15),
            status: SubmissionStatus::Pending,
            experience: "5+ years".to_string(),
            languages: strings(&["Hindi", "English"]),
            email: "priya.sharma@email.com".to_string(),
            phone: "+91 9876543210".to_string(),
        },
        Submission {
            id: "2".to_string(),
            name: "Rahul Verma".to_string(),
            category: "DJ".to_string(),
            city: "Delhi".to_string(),
            fee: "₹25,000".to_string(),
            submitted_at: date(2025, 1, 14),
            status: SubmissionStatus::Approved,
            experience: "3+ years".to_string(),
            languages: strings(&["Hindi", "English", "Punjabi"]),
            email: "rahul.verma@email.com".to_string(),
            phone: "+91 9876543211".to_string(),
        },
        Submission {
            id: "3".to_string(),
            name: "Kavya Nair".to_string(),
            category: "Dancer".to_string(),
            city: "Bangalore".to_string(),
            fee: "₹40,000".to_string(),
            submitted_at: date(2025, 1, 13),
            status: SubmissionStatus::Rejected,
            experience: "7+ years".to_string(),
            languages: strings(&["Tamil", "English", "Kannada"]),
            email: "kavya.nair@email.com".to_string(),
            phone: "+91 9876543212".to_string(),
        },
        Submission {
            id: "4".to_string(),
            name: "Dr. Amit Kumar".to_string(),
            category: "Speaker".to_string(),
            city: "Chennai".to_string(),
            fee: "₹75,000".to_string(),
            submitted_at: date(2025, 1, 12),
            status: SubmissionStatus::Pending,
            experience: "10+ years".to_string(),
            languages: strings(&["English", "Hindi", "Tamil"]),
            email: "amit.kumar@email.com".to_string(),
            phone: "+91 9876543213".to_string(),
        },
        Submission {
            id: "5".to_string(),
            name: "Riya Patel".to_string(),
            category: "Singer".to_string(),
            city: "Ahmedabad".to_string(),
            fee: "₹30,000".to_string(),
            submitted_at: date(2025, 1, 11),
            status: SubmissionStatus::Approved,
            experience: "4+ years".to_string(),
            languages: strings(&["Gujarati", "Hindi", "English"]),
            email: "riya.patel@email.com".to_string(),
            phone: "+91 9876543214".to_string(),
        },
    ]
}
