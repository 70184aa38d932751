use crate::view::{NavTarget, View};

pub struct NavLink {
    pub name: &'static str,
    pub anchor: Option<&'static str>,
    pub view: Option<View>,
}

impl NavLink {
    /// A link that names a view switches to it; otherwise it scrolls to its
    /// anchor.
    pub fn target(&self) -> NavTarget {
        match (self.view, self.anchor) {
            (Some(view), _) => NavTarget::View(view),
            (None, Some(anchor)) => NavTarget::anchor(anchor),
            (None, None) => NavTarget::View(View::Home),
        }
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", anchor: Some("#home"), view: Some(View::Home) },
    NavLink { name: "About", anchor: Some("#about"), view: None },
    NavLink { name: "Features", anchor: Some("#features"), view: None },
    NavLink { name: "Services", anchor: Some("#services"), view: None },
    NavLink { name: "Contact", anchor: Some("#contact"), view: None },
    NavLink { name: "Our Experts", anchor: None, view: Some(View::Experts) },
];

/// (icon, text)
pub const COMMITMENTS: &[(&str, &str)] = &[
    ("bi-house-heart-fill", "Personalized care in the comfort of your home."),
    ("bi-check-circle-fill", "Painless, non-invasive therapy with zero side effects."),
    ("bi-graph-up-arrow", "Achieving long-term, sustainable results for your health."),
    ("bi-person-arms-up", "Empowering you to live an independent, pain-free life."),
];

pub struct Feature {
    pub img: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        img: "/assets/feature-german-therapy.jpg",
        icon: "bi-award-fill",
        title: "German Research-Based Therapy",
        desc: "We utilize state-of-the-art Matrix Rhythm Therapy, ensuring effective and scientifically-proven results at a cellular level.",
    },
    Feature {
        img: "/assets/feature-women-health.png",
        icon: "bi-gender-female",
        title: "Specialized Women's Health",
        desc: "Offering dedicated, compassionate care for conditions like PCOD/PCOS, and managing pregnancy-related back pain with safe, gentle therapies.",
    },
    Feature {
        img: "/assets/feature-diet-plan.png",
        icon: "bi-apple",
        title: "Holistic Diet Plans",
        desc: "Recovery is more than therapy. We provide tailored nutrition plans that complement your treatment, accelerating healing and boosting overall wellness.",
    },
    Feature {
        img: "/assets/feature-safe-devices.jpg",
        icon: "bi-shield-check",
        title: "Safe for Medical Implants",
        desc: "Your safety is our priority. Our advanced equipment is certified safe for patients with pacemakers, metal implants, and stents.",
    },
    Feature {
        img: "/assets/feature-avoid-surgery.png",
        icon: "bi-bandaid-fill",
        title: "Avoid Invasive Surgery",
        desc: "Our powerful, non-surgical treatments can often provide relief and restore function, helping you to avoid the risks and recovery time of surgery.",
    },
    Feature {
        img: "/assets/feature-chronic-cases.png",
        icon: "bi-clock-history",
        title: "Success in Chronic Cases",
        desc: "Don't lose hope. We specialize in treating long-standing, chronic conditions (10+ years), often achieving results where others have failed.",
    },
    Feature {
        img: "/assets/feature-diabetic-wound.jpg",
        icon: "bi-droplet-fill",
        title: "Diabetic Wound Healing",
        desc: "Our specialized therapy promotes blood circulation and tissue regeneration, significantly accelerating the healing of stubborn diabetic wounds.",
    },
    Feature {
        img: "/assets/feature-lymphedema.png",
        icon: "bi-activity",
        title: "Lymphedema Management",
        desc: "We provide expert care and complete decongestive therapy (CDT) to manage lymphedema, reduce swelling, and improve your quality of life.",
    },
    Feature {
        img: "/assets/feature-cancer-care.png",
        icon: "bi-ribbon",
        title: "Supportive Cancer Care",
        desc: "Providing gentle, supportive physiotherapy to help manage treatment side effects, reduce pain and fatigue, and improve mobility for cancer patients.",
    },
];

/// (image, condition)
pub const SERVICES: &[(&str, &str)] = &[
    ("/assets/service-spondolysis.png", "Spondolysis"),
    ("/assets/service-spondylolisthesis.png", "Spondylolisthesis"),
    ("/assets/service-frozen-shoulder.jpg", "Frozen Shoulder"),
    ("/assets/service-knee-rehab.jpeg", "Knee Rehabilitation"),
    ("/assets/service-back-pain.png", "Back Pain"),
    ("/assets/service-neck-pain.png", "Neck Pain"),
    ("/assets/service-stroke.png", "Stroke Rehabilitation"),
    ("/assets/service-parkinsons.png", "Parkinson's Disease"),
];

pub struct ContactInfo {
    pub email: &'static str,
    pub phone_display: &'static str,
    pub phone_e164: &'static str,
    pub service_area: &'static str,
}

pub const CONTACT: ContactInfo = ContactInfo {
    email: "info@myphysiomatrix.com",
    phone_display: "+91 9049529358",
    phone_e164: "919049529358",
    service_area: "We provide services across the Mumbai region, bringing expert care right to your doorstep.",
};

pub struct CredentialGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub struct Expert {
    pub name: &'static str,
    pub title: &'static str,
    pub details: &'static [CredentialGroup],
}

pub const EXPERTS: &[Expert] = &[
    Expert {
        name: "Dr. Muskan (PT)",
        title: "Physiotherapist | Matrix Rhythm Therapy Practitioner | Nutrition & Dietetics Specialist",
        details: &[
            CredentialGroup {
                title: "Education & Qualifications",
                items: &[
                    "Bachelor of Physiotherapy (BPT) – 2023",
                    "Certified Matrix Rhythm Therapy Practitioner – Dr. Randoll Institute, Germany (2023)",
                    "Diploma in Applied Nutrition, Food Science & Dietetics – NFNA (2025)",
                ],
            },
            CredentialGroup {
                title: "Professional Experience",
                items: &[
                    "Consultant Physiotherapist – Matrix German Therapy Centre, Mumbai, India (2023–2025)",
                    "Physiotherapy Home Visits – 2023–Present",
                ],
            },
            CredentialGroup {
                title: "Specializations",
                items: &[
                    "Advanced Therapeutic Techniques",
                    "Nutritional & Dietary Guidance",
                    "Holistic Rehabilitation",
                ],
            },
        ],
    },
    Expert {
        name: "Dr. Chetana M. Jirage (PT)",
        title: "Matrix Rhythm Therapy Practitioner | Pelvic Floor Rehabilitation Specialist",
        details: &[
            CredentialGroup {
                title: "Education & Qualifications",
                items: &[
                    "Bachelor of Physiotherapy (BPT) – 2022",
                    "Certified Matrix Rhythm Therapy Practitioner – Dr. Randoll Institute, Germany (2022)",
                    "Certified Female Pelvic Floor Rehabilitation Specialist",
                ],
            },
            CredentialGroup {
                title: "Professional Experience",
                items: &[
                    "Consultant Physiotherapist – Matrix German Therapy Centre, Mumbai, India (2022–2024)",
                    "Pelvic Floor Physiotherapist – JOGO Health Pvt. Ltd., India (2024–2025)",
                ],
            },
            CredentialGroup {
                title: "Specializations",
                items: &[
                    "Matrix Rhythm Therapy",
                    "Female Pelvic Floor Rehabilitation",
                    "Pain Management & Functional Rehabilitation",
                ],
            },
        ],
    },
    Expert {
        name: "Dr. Nazmeen Shaikh (PT)",
        title: "Musculoskeletal & Rehabilitation Specialist",
        details: &[
            CredentialGroup {
                title: "Education & Qualifications",
                items: &["Bachelor of Physiotherapy (BPT) – 2023"],
            },
            CredentialGroup {
                title: "Professional Experience",
                items: &[
                    "Consultant Physiotherapist – Dr. Dac’s Ayansh Hospital, Bhiwandi, India (Current)",
                    "Physiotherapy Home Visits – 2023–Present",
                    "Consultant Physiotherapist – Dr. Vanga Polyclinic, Bhiwandi, India (2023–2024)",
                    "Consultant Physiotherapist – Matrix German Therapy Centre, Mumbai, India (2024–2025)",
                ],
            },
        ],
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub case: &'static str,
    pub review: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Nanda Uttam",
        case: "Case of Total knee replacement",
        review: "I have recently booked a physiotherapist for my mother, and the service was absolutely wonderful. Dr. Nazmeen was therapist and she is professional, attentive, and tailored the treatment exactly as per our requirement My mother experienced noticeable relief from her pain, and we're truly grateful for the care provided. Highly recommended!",
    },
    Testimonial {
        name: "Priyanka Sharma",
        case: "Case of Slipped Disc",
        review: "I had a great experience with my physiotherapy sessions by Dr. Muskan . The treatment helped relieve my back pain and improved my mobility significantly. The staff was professional, friendly, and always supportive. I’m feeling much better now.",
    },
    Testimonial {
        name: "Zoya pathan",
        case: "Case of chronic neck pain",
        review: "I had been struggling with persistent neck pain for several weeks before starting physiotherapy. After a few sessions, I noticed significant improvement in my mobility and a reduction in pain. The therapist Dr Chetna was professional, explained each step clearly, and provided exercises that helped me regain strength and flexibility. I'm now almost pain-free and very satisfied with the treatment. Highly recommend!",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_anchors_match_home_sections() {
        let anchors: Vec<_> = NAV_LINKS.iter().filter_map(|l| l.anchor).collect();
        assert_eq!(anchors, vec!["#home", "#about", "#features", "#services", "#contact"]);
    }

    #[test]
    fn every_nav_link_goes_somewhere() {
        assert!(NAV_LINKS.iter().all(|l| l.anchor.is_some() || l.view.is_some()));
    }

    #[test]
    fn view_links_take_precedence_over_anchors() {
        assert_eq!(NAV_LINKS[0].target(), NavTarget::View(View::Home));
        assert_eq!(NAV_LINKS[4].target(), NavTarget::Anchor("contact".into()));
        assert_eq!(NAV_LINKS[5].target(), NavTarget::View(View::Experts));
    }
}
