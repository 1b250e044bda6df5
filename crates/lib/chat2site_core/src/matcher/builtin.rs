//! Built-in keyword, reply and blueprint table.

use super::catalog::{Catalog, CategoryEntry, Localized};
use crate::models::{Blueprint, Category};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn blueprint(
    title: &str,
    subtitle: &str,
    primary_color: &str,
    sections: &[&str],
    features: &[&str],
) -> Blueprint {
    Blueprint {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        primary_color: primary_color.to_string(),
        sections: strings(sections),
        features: strings(features),
    }
}

/// The shipped catalog. Ranked categories are listed in match priority order.
pub(super) fn catalog() -> Catalog {
    Catalog {
        greeting: Localized {
            ar: strings(&[
                "مرحباً! أنا مساعدك الذكي لإنشاء صفحات الهبوط. أخبرني عن مشروعك وسأساعدك في بناء صفحة مثالية.",
                "أهلاً بك! دعني أساعدك في إنشاء صفحة هبوط احترافية. ما نوع العمل أو الخدمة التي تريد الترويج لها؟",
            ]),
            en: strings(&[
                "Hello! I'm your AI assistant for creating landing pages. Tell me about your project and I'll help you build the perfect page.",
                "Welcome! Let me help you create a professional landing page. What type of business or service would you like to promote?",
            ]),
        },
        categories: vec![restaurant(), tech(), ecommerce()],
        fallback: general(),
    }
}

fn restaurant() -> CategoryEntry {
    const SECTIONS: &[&str] = &["Hero", "Menu", "About", "Reservations", "Contact"];
    CategoryEntry {
        category: Category::Restaurant,
        keywords: strings(&["restaurant", "مطعم", "food"]),
        replies: Localized {
            ar: strings(&[
                "رائع! مطعم هو مشروع ممتاز. سأحتاج لبعض التفاصيل: ما نوع المأكولات التي تقدمونها؟ وما هو الجو العام للمطعم؟",
                "ممتاز! أحب مشاريع المطاعم. هل تريد التركيز على الطعام المنزلي أم الفاخر؟ وما أهم ميزة تنافسية لديك؟",
            ]),
            en: strings(&[
                "Great! A restaurant is an excellent project. I need some details: What type of cuisine do you serve? What's the overall atmosphere?",
                "Excellent! I love restaurant projects. Do you want to focus on homestyle or fine dining? What's your main competitive advantage?",
            ]),
        },
        blueprint: Localized {
            ar: blueprint(
                "مطعم الذواقة",
                "تجربة طعام لا تُنسى",
                "#dc2626",
                SECTIONS,
                &["مكونات طازجة", "طهاة خبراء", "أجواء مريحة"],
            ),
            en: blueprint(
                "Gourmet Restaurant",
                "An Unforgettable Dining Experience",
                "#dc2626",
                SECTIONS,
                &["Fresh Ingredients", "Expert Chefs", "Cozy Atmosphere"],
            ),
        },
    }
}

fn tech() -> CategoryEntry {
    const SECTIONS: &[&str] = &["Hero", "Features", "Screenshots", "Download", "Support"];
    CategoryEntry {
        category: Category::Tech,
        keywords: strings(&["tech", "app", "تطبيق", "تقنية"]),
        replies: Localized {
            ar: strings(&[
                "ممتاز! التطبيقات التقنية مجال رائع. أخبرني أكثر: ما المشكلة التي يحلها تطبيقك؟ من هم المستخدمون المستهدفون؟",
                "رائع! التقنية مجال مثير. هل تريد التركيز على سهولة الاستخدام أم المميزات المتقدمة؟",
            ]),
            en: strings(&[
                "Excellent! Tech applications are a great field. Tell me more: What problem does your app solve? Who are your target users?",
                "Great! Technology is an exciting field. Do you want to focus on ease of use or advanced features?",
            ]),
        },
        blueprint: Localized {
            ar: blueprint(
                "تطبيق المستقبل",
                "حلول تقنية متقدمة",
                "#7c3aed",
                SECTIONS,
                &["سهل الاستخدام", "آمن", "أداء سريع"],
            ),
            en: blueprint(
                "Future App",
                "Advanced Tech Solutions",
                "#7c3aed",
                SECTIONS,
                &["User Friendly", "Secure", "Fast Performance"],
            ),
        },
    }
}

fn ecommerce() -> CategoryEntry {
    const SECTIONS: &[&str] = &["Hero", "Products", "Categories", "Cart", "Checkout"];
    CategoryEntry {
        category: Category::Ecommerce,
        keywords: strings(&["ecommerce", "shop", "متجر", "تجارة"]),
        replies: Localized {
            ar: strings(&[
                "متجر إلكتروني فكرة ممتازة! ما نوع المنتجات التي تبيعها؟ هل تستهدف السوق المحلي أم العالمي؟",
                "ممتاز! التجارة الإلكترونية مجال واعد. ما أهم ميزة تنافسية لديك؟",
            ]),
            en: strings(&[
                "An online store is an excellent idea! What type of products do you sell? Are you targeting local or global markets?",
                "Excellent! E-commerce is a promising field. What's your main competitive advantage?",
            ]),
        },
        blueprint: Localized {
            ar: blueprint(
                "متجر العصر",
                "تسوق بذكاء وراحة",
                "#059669",
                SECTIONS,
                &["منتجات عالية الجودة", "شحن سريع", "دعم 24/7"],
            ),
            en: blueprint(
                "Modern Store",
                "Shop Smart and Comfortable",
                "#059669",
                SECTIONS,
                &["High Quality Products", "Fast Shipping", "24/7 Support"],
            ),
        },
    }
}

fn general() -> CategoryEntry {
    const SECTIONS: &[&str] = &["Hero", "Features", "About", "Contact"];
    CategoryEntry {
        category: Category::General,
        keywords: Vec::new(),
        replies: Localized {
            ar: strings(&[
                "فهمت! دعني أساعدك في تطوير هذه الفكرة. هل يمكنك إخباري أكثر عن جمهورك المستهدف؟",
                "هذا يبدو مثيراً للاهتمام! ما الهدف الرئيسي من صفحة الهبوط؟ زيادة المبيعات أم جمع العملاء المحتملين؟",
                "رائع! سأبدأ في تصميم صفحة تناسب مشروعك. ما الألوان التي تفضلها؟",
            ]),
            en: strings(&[
                "I understand! Let me help you develop this idea. Can you tell me more about your target audience?",
                "This sounds interesting! What's the main goal of your landing page? Increase sales or generate leads?",
                "Great! I'll start designing a page that fits your project. What colors do you prefer?",
            ]),
        },
        blueprint: Localized {
            ar: blueprint(
                "مشروعك المميز",
                "بناء بالذكاء الاصطناعي",
                "#3b82f6",
                SECTIONS,
                &["ميزة رائعة 1", "ميزة رائعة 2", "ميزة رائعة 3"],
            ),
            en: blueprint(
                "Your Amazing Project",
                "Built with AI-powered Chat2Site",
                "#3b82f6",
                SECTIONS,
                &["Amazing Feature 1", "Amazing Feature 2", "Amazing Feature 3"],
            ),
        },
    }
}
