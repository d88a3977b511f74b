//! Static catalogs: focus areas, careers, soft skills, and the scripted
//! dialogue text.

/// Broad career domains the focus recommendation chooses from.
pub const FOCUS_AREAS: &[&str] = &[
    "Digital Transformation & E-commerce",
    "Software Development & Cloud Computing",
    "Cybersecurity & Data Privacy",
    "Artificial Intelligence & Machine Learning",
    "Medicine & Healthcare",
    "Sports & Professional Athletics",
    "Aerospace & Aviation",
    "Agriculture & Agribusiness",
    "Finance & Financial Services",
    "Renewable Energy",
    "Biotechnology & Genomics",
    "Robotics & Automation",
    "Data Analytics & Business Intelligence",
    "Internet of Things & Embedded Systems",
    "Blockchain & Web3 Technologies",
    "Civil Engineering",
    "Architecture",
    "Business & Entrepreneurship",
];

/// Careers offered for each focus area.
const CAREERS: &[(&str, &[&str])] = &[
    (
        "Digital Transformation & E-commerce",
        &[
            "Digital Marketing Manager",
            "E-commerce Specialist",
            "UX/UI Designer",
            "Content Marketing Strategist",
            "SEO Specialist",
            "Social Media Manager",
            "Web Analyst",
        ],
    ),
    (
        "Software Development & Cloud Computing",
        &[
            "Software Engineer",
            "Web Developer (Front-End, Back-End, Full-Stack)",
            "Cloud Architect",
            "DevOps Engineer",
            "Mobile App Developer (iOS, Android)",
            "Database Administrator",
        ],
    ),
    (
        "Cybersecurity & Data Privacy",
        &[
            "Security Analyst",
            "Penetration Tester",
            "Cybersecurity Engineer",
            "Security Architect",
            "Data Protection Officer",
            "Information Security Manager",
        ],
    ),
    (
        "Artificial Intelligence & Machine Learning",
        &[
            "Machine Learning Engineer",
            "Data Scientist",
            "AI Researcher",
            "NLP Engineer",
            "Computer Vision Engineer",
            "AI Ethicist",
        ],
    ),
    (
        "Medicine & Healthcare",
        &[
            "Doctor (General Practitioner)",
            "Surgeon (various specializations)",
            "Cardiologist",
            "Neurologist",
            "Pediatrician",
            "Oncologist",
            "Nurse Practitioner",
            "Physician Assistant",
            "Medical Researcher",
            "Pharmacist",
        ],
    ),
    (
        "Sports & Professional Athletics",
        &[
            "Professional Athlete (various sports)",
            "Olympic Athlete",
            "Sports Coach (various levels)",
            "Fitness Trainer",
            "Sports Medicine Physician",
            "Physical Therapist (sports focus)",
            "Sports Analyst",
            "Sports Agent",
        ],
    ),
    (
        "Aerospace & Aviation",
        &[
            "Pilot (Commercial, Private, Airline)",
            "Aerospace Engineer",
            "Aircraft Mechanic",
            "Air Traffic Controller",
            "Flight Attendant",
            "Aerospace Technician",
            "Astronaut",
        ],
    ),
    (
        "Agriculture & Agribusiness",
        &[
            "Farm Manager",
            "Agricultural Scientist",
            "Agronomist",
            "Agricultural Consultant",
            "Food Scientist",
            "Agribusiness Manager",
            "Precision Agriculture Specialist",
        ],
    ),
    (
        "Finance & Financial Services",
        &[
            "Financial Analyst",
            "Investment Banker",
            "Financial Advisor",
            "Accountant",
            "Economist",
            "Actuary",
            "Loan Officer",
            "Financial Planner",
        ],
    ),
    (
        "Renewable Energy",
        &[
            "Solar Energy Engineer",
            "Wind Energy Engineer",
            "Energy Storage Specialist",
            "Sustainability Consultant",
            "Renewable Energy Project Manager",
            "Environmental Engineer",
        ],
    ),
    (
        "Biotechnology & Genomics",
        &[
            "Biotechnologist",
            "Genomic Scientist",
            "Research Scientist (Biology/Chemistry)",
            "Pharmaceutical Scientist",
            "Bioinformatics Analyst",
            "Genetic Counselor",
        ],
    ),
    (
        "Robotics & Automation",
        &[
            "Robotics Engineer",
            "Automation Engineer",
            "Control Systems Engineer",
            "Robotics Technician",
            "AI Robotics Specialist",
            "Robotics Programmer",
        ],
    ),
    (
        "Data Analytics & Business Intelligence",
        &[
            "Data Analyst",
            "Business Intelligence Analyst",
            "Data Engineer",
            "Data Visualization Specialist",
            "Market Research Analyst",
            "Statistician",
        ],
    ),
    (
        "Internet of Things & Embedded Systems",
        &[
            "IoT Engineer",
            "Embedded Systems Engineer",
            "Firmware Engineer",
            "IoT Solutions Architect",
            "Sensor Technology Specialist",
            "Smart City Planner",
        ],
    ),
    (
        "Blockchain & Web3 Technologies",
        &[
            "Blockchain Developer",
            "Smart Contract Auditor",
            "Web3 Developer",
            "Cryptocurrency Analyst",
            "NFT Strategist",
            "Decentralized Finance (DeFi) Specialist",
        ],
    ),
    (
        "Civil Engineering",
        &[
            "Structural Engineer",
            "Transportation Engineer",
            "Geotechnical Engineer",
            "Water Resources Engineer",
            "Construction Manager",
            "Urban Planner",
        ],
    ),
    (
        "Architecture",
        &[
            "Architect",
            "Urban Planner",
            "Landscape Architect",
            "Sustainable Architect",
            "Architectural Designer",
            "BIM Manager",
            "Interior Designer",
        ],
    ),
    (
        "Business & Entrepreneurship",
        &[
            "Business Owner",
            "Entrepreneur",
            "Startup Founder",
            "CEO",
            "Marketing Manager",
            "Sales Manager",
            "Business Analyst",
            "Management Consultant",
            "Financial Manager",
        ],
    ),
];

/// Soft skills recommended regardless of focus area.
pub const EVERGREEN_SOFT_SKILLS: &[&str] = &[
    "Problem-solving",
    "Communication",
    "Critical thinking",
    "Continuous learning",
    "Teamwork",
    "Adaptability",
    "Ethical considerations",
    "Data analysis fundamentals",
    "Basic programming principles",
    "Project management basics",
];

/// The scripted personality questions, asked in order.
pub const PERSONALITY_QUESTIONS: &[&str] = &[
    "How would you describe your energy levels in social situations?",
    "Do you prefer to plan things out in detail or go with the flow?",
    "How do you typically handle disagreements with others?",
    "Are you more comfortable in structured environments or unstructured ones?",
    "Do you enjoy meeting new people, or do you prefer to stick with familiar faces?",
    "What types of activities make you lose track of time?",
    "Do you consider yourself more of a thinker or a feeler when making decisions?",
    "How do you approach setting and achieving personal goals?",
    "Do you enjoy taking risks, or do you prefer to play it safe?",
    "How do you recharge after a long day or week?",
];

/// Careers for a focus area, or `None` if the area is not in the catalog.
pub fn careers_for(focus_area: &str) -> Option<&'static [&'static str]> {
    CAREERS
        .iter()
        .find(|(area, _)| *area == focus_area)
        .map(|(_, careers)| *careers)
}

/// Scripted replies used by the dialogue engine.
pub mod messages {
    pub const AGE_PROMPT: &str = "Hello! To get started, could you please tell me your age?";
    pub const INVALID_AGE: &str = "Please enter a valid age (a number).";
    pub const PASSION_PROMPT: &str = "That's great. What are you most passionate about?";
    pub const PASSION_AFTER_AGE: &str = "Thank you. What are you most passionate about?";
    pub const EMPTY_PASSION: &str =
        "I didn't catch that. Could you tell me what you are most passionate about?";
    pub const LOCATION_PROMPT: &str = "Thank you for answering the personality questions. \
        Could you please tell me where you are currently located? \
        This will help me provide more relevant career information.";
    pub const PROCESSING_ACK: &str =
        "Thank you for completing the personality questions. We are now processing your responses.";
    pub const ALREADY_COMPLETE: &str = "Your assessment is already complete. \
        Head over to the recommendations to explore your focus areas and careers.";
    pub const INFERENCE_RETRY: &str = "Sorry, I couldn't process your responses just now. \
        Please send any message to try again.";

    /// Acknowledgement sent once the location is captured.
    pub fn location_ack(location: &str) -> String {
        format!(
            "Thank you for sharing your location ({location}). We are now processing your information."
        )
    }
}
