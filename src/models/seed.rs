//! Static seed content for every page and the assistant.
//!
//! Each call builds fresh values so page containers never share posts.

use super::forum::{AssistantAnswer, Comment, Post, Reference};
use super::page::Page;

type SeedComment = (&'static str, &'static str, &'static str);

struct SeedPost {
    title: &'static str,
    body: &'static str,
    votes: i64,
    comments: &'static [SeedComment],
}

const HOME: &[SeedPost] = &[
    SeedPost {
        title: "UPS vs FedEx for international B2B shipments",
        body: "I'm looking to expand my business internationally and I'm torn between UPS and FedEx for B2B shipments. Any experiences or recommendations?",
        votes: 24,
        comments: &[
            ("I've had great experiences with UPS for international shipments. Their tracking is top-notch.", "ShippingPro", "2023-06-15"),
            ("FedEx has better rates for heavier packages in my experience.", "LogisticsGuru", "2023-06-16"),
            ("It really depends on the specific countries you're shipping to. I'd recommend getting quotes for your most common routes.", "GlobalTrader", "2023-06-17"),
        ],
    },
    SeedPost {
        title: "Best practices for reducing shipping damages",
        body: "We've been experiencing an increase in shipping damages lately. What are some best practices you've implemented to reduce damages during transit?",
        votes: 18,
        comments: &[
            ("Double boxing has significantly reduced our damage rates for fragile items.", "CarefulShipper", "2023-06-14"),
            ("We started using custom foam inserts and haven't looked back. It's a bit more expensive but worth it.", "QualityFirst", "2023-06-15"),
        ],
    },
    SeedPost {
        title: "New USPS rates impact on small businesses",
        body: "The new USPS rates are out. How are other small businesses adapting to these changes? Are you considering switching carriers?",
        votes: 31,
        comments: &[
            ("We're looking into regional carriers for some of our shipments now. The USPS increases are hitting us hard.", "SmallBizOwner", "2023-06-13"),
            ("We've started offering local pickup options to offset some of the shipping costs.", "AdaptiveEntrepreneur", "2023-06-14"),
            ("Considering a switch to UPS SurePost for lighter packages. Anyone have experience with this?", "ShippingNewbie", "2023-06-15"),
        ],
    },
];

const POPULAR: &[SeedPost] = &[
    SeedPost {
        title: "Comparing API integrations: UPS vs FedEx vs USPS",
        body: "Let's discuss the pros and cons of each carrier's API for shipment tracking and label generation. Which one provides the best developer experience?",
        votes: 89,
        comments: &[
            ("UPS's API documentation is the most comprehensive in my experience.", "DevGuru", "2023-06-10"),
            ("FedEx's API has been the most reliable for us, especially for international shipments.", "GlobalShipper", "2023-06-11"),
            ("USPS's API is straightforward, but their error handling could use some improvement.", "APIEnthusiast", "2023-06-12"),
        ],
    },
    SeedPost {
        title: "Strategies for optimizing LTL shipping costs",
        body: "Share your tips and tricks for reducing Less Than Truckload (LTL) shipping costs without compromising on delivery times or service quality.",
        votes: 76,
        comments: &[
            ("We've had success with freight consolidation services. It takes a bit more planning but the cost savings are significant.", "LTLExpert", "2023-06-09"),
            ("Negotiating volume discounts with carriers has been a game-changer for us.", "BulkShipper", "2023-06-10"),
        ],
    },
];

const UPS_VS_FEDEX: &[SeedPost] = &[
    SeedPost {
        title: "UPS vs FedEx: International shipping rates comparison 2023",
        body: "I've compiled a detailed comparison of UPS and FedEx international shipping rates for 2023. Let's discuss the findings and their implications for B2B shippers.",
        votes: 56,
        comments: &[
            ("Great comparison! In my experience, UPS tends to be more cost-effective for heavier packages.", "IntlShipper", "2023-06-08"),
            ("FedEx seems to have better rates for express shipments to Europe. Anyone else noticed this?", "EuroTrader", "2023-06-09"),
        ],
    },
    SeedPost {
        title: "Customer service experiences: UPS vs FedEx",
        body: "Share your experiences with UPS and FedEx customer service. Which carrier do you find more responsive and helpful in resolving issues?",
        votes: 43,
        comments: &[
            ("UPS customer service has been more consistent in my experience. They seem to have better training.", "ServiceMinded", "2023-06-07"),
            ("I've had better luck with FedEx for resolving complex customs issues.", "CustomsPro", "2023-06-08"),
        ],
    },
];

const PACKAGING: &[SeedPost] = &[
    SeedPost {
        title: "Innovative packaging materials for fragile items",
        body: "What are some innovative packaging materials you've used or come across for shipping fragile items? Share your experiences and recommendations.",
        votes: 67,
        comments: &[
            ("We've been using biodegradable packing peanuts made from cornstarch. They work great and are eco-friendly!", "GreenPacker", "2023-06-06"),
            ("Inflatable air pillows have been a game-changer for us. They're lightweight and provide excellent protection.", "SafeShipper", "2023-06-07"),
        ],
    },
    SeedPost {
        title: "Cost-effective eco-friendly packaging options",
        body: "Let's discuss cost-effective eco-friendly packaging options for B2B shipments. What solutions have you found that balance sustainability and affordability?",
        votes: 52,
        comments: &[
            ("We switched to recycled cardboard boxes and saw only a marginal increase in costs. Our customers love it.", "EcoShipper", "2023-06-05"),
            ("Paper tape instead of plastic tape has been an easy switch for us. It's surprisingly strong!", "GreenPacker", "2023-06-06"),
        ],
    },
];

const TRACKING: &[SeedPost] = &[
    SeedPost {
        title: "Dealing with 'in transit' status for extended periods",
        body: "How do you handle situations where packages remain 'in transit' for unusually long periods? What strategies do you use to investigate and resolve these issues?",
        votes: 72,
        comments: &[
            ("We've set up automated alerts for packages that haven't updated in 48 hours. This helps us proactively reach out to carriers.", "ProactiveShipper", "2023-06-04"),
            ("Building relationships with local carrier reps has been crucial for quickly resolving these issues.", "NetworkBuilder", "2023-06-05"),
        ],
    },
    SeedPost {
        title: "Best practices for communicating tracking updates to customers",
        body: "What are your best practices for keeping customers informed about their shipment status? How do you handle delays or issues in a way that maintains customer satisfaction?",
        votes: 61,
        comments: &[
            ("We've implemented a system that sends automated updates at key milestones. Customers appreciate the proactive communication.", "CustomerFirst", "2023-06-03"),
            ("For B2B clients, we offer a branded tracking page that includes expected delivery dates and any potential delays.", "B2BExpert", "2023-06-04"),
        ],
    },
];

const COST_OPTIMIZATION: &[SeedPost] = &[
    SeedPost {
        title: "Strategies for reducing shipping costs without compromising quality",
        body: "What are some effective strategies you've implemented to reduce shipping costs while maintaining service quality? Let's share our experiences and ideas.",
        votes: 85,
        comments: &[
            ("We've had great success with zone skipping for our high-volume lanes. It requires more planning but the cost savings are significant.", "LogisticsWizard", "2023-06-02"),
            ("Implementing a multi-carrier strategy has allowed us to always choose the most cost-effective option for each shipment.", "FlexibleShipper", "2023-06-03"),
        ],
    },
    SeedPost {
        title: "Negotiating better rates with carriers: Tips and tricks",
        body: "For those who have successfully negotiated better rates with carriers, what strategies worked best for you? Any advice for smaller businesses looking to improve their shipping rates?",
        votes: 73,
        comments: &[
            ("Consolidating our shipping volume with fewer carriers gave us more leverage in negotiations. We saw a 15% reduction in rates.", "VolumeShipper", "2023-06-01"),
            ("Don't underestimate the power of data. We presented our shipping patterns and volumes to carriers, which helped us secure better rates for our most common routes.", "DataDrivenLogistics", "2023-06-02"),
        ],
    },
];

const DELIVERY_TIMES: &[SeedPost] = &[
    SeedPost {
        title: "Improving last-mile delivery efficiency",
        body: "Last-mile delivery continues to be a challenge. What innovative solutions or best practices have you implemented to improve efficiency in this crucial stage?",
        votes: 91,
        comments: &[
            ("We've partnered with local businesses to set up pickup points. It's reduced our last-mile costs and customers appreciate the flexibility.", "LocalLogistics", "2023-05-31"),
            ("Implementing route optimization software has significantly improved our delivery efficiency. We're completing 20% more deliveries per day.", "TechSavvyShipper", "2023-06-01"),
        ],
    },
    SeedPost {
        title: "Strategies for meeting same-day delivery expectations",
        body: "With the growing demand for same-day delivery, how are you adapting your operations to meet these expectations? What challenges are you facing?",
        votes: 88,
        comments: &[
            ("We've set up micro-fulfillment centers in our key markets. It's been a game-changer for same-day delivery.", "UrbanLogistics", "2023-05-30"),
            ("We're using predictive analytics to anticipate demand and pre-position inventory. It's helping us meet same-day delivery for our most popular items.", "DataDrivenDelivery", "2023-05-31"),
        ],
    },
];

const ANSWER_TITLE: &str = "Shipping Best Practices";

const ANSWER_BODY: &str = "Based on our forum discussions, here are some key shipping best practices: Use appropriate packaging materials to reduce damages. Compare rates between carriers for different shipment types. Implement a multi-carrier strategy for cost optimization. Set up automated tracking alerts for proactive issue resolution. Consider eco-friendly packaging options to appeal to environmentally conscious customers. Optimize last-mile delivery by partnering with local businesses for pickup points. Utilize route optimization software to improve delivery efficiency. For international shipments, thoroughly research country-specific regulations and customs requirements. Regularly review and negotiate carrier contracts to ensure competitive rates. Invest in quality packaging to minimize damages and returns. Implement a robust tracking system to keep customers informed throughout the shipping process. Consider offering multiple shipping options to cater to different customer needs and preferences.";

const ANSWER_REFERENCES: &[(&str, &str)] = &[
    ("Reducing shipping damages", "reduce-shipping-damages"),
    ("Carrier comparison strategies", "carrier-comparison"),
    ("Cost optimization techniques", "cost-optimization"),
    ("Effective tracking and communication", "tracking-communication"),
    ("Eco-friendly shipping solutions", "eco-friendly-shipping"),
];

fn seeds_for(page: Page) -> &'static [SeedPost] {
    match page {
        Page::Home => HOME,
        Page::Popular => POPULAR,
        Page::New => &[],
        Page::UpsVsFedex => UPS_VS_FEDEX,
        Page::Packaging => PACKAGING,
        Page::Tracking => TRACKING,
        Page::CostOptimization => COST_OPTIMIZATION,
        Page::DeliveryTimes => DELIVERY_TIMES,
    }
}

/// Fresh copies of the seed posts for a page.
///
/// Post ids are list positions; comment ids start at 1 within each post.
pub fn seed_posts(page: Page) -> Vec<Post> {
    seeds_for(page)
        .iter()
        .enumerate()
        .map(|(index, seed)| Post {
            id: index,
            title: seed.title.to_string(),
            body: seed.body.to_string(),
            vote_count: seed.votes,
            comments: seed
                .comments
                .iter()
                .enumerate()
                .map(|(i, (content, author, date))| {
                    Comment::new(i as u64 + 1, *content, *author, *date)
                })
                .collect(),
        })
        .collect()
}

/// The one answer the assistant ever gives.
pub fn assistant_answer() -> AssistantAnswer {
    AssistantAnswer {
        title: ANSWER_TITLE.to_string(),
        body: ANSWER_BODY.to_string(),
        references: ANSWER_REFERENCES
            .iter()
            .map(|(title, id)| Reference {
                title: title.to_string(),
                id: id.to_string(),
            })
            .collect(),
    }
}
