/// Editorial stories bundled with the binary. Distinct from
/// user-submitted stories: never persisted, never moderated.
pub struct FeaturedStory {
    pub title: &'static str,
    pub author: &'static str,
    pub body: &'static str,
}

pub const FEATURED_STORIES: &[FeaturedStory] = &[
    FeaturedStory {
        title: "Light After Sunset",
        author: "Editorial Team",
        body: "When the Kéla microgrid came online, the village clinic kept its \
               vaccine fridge running through the night for the first time. Shop \
               owners stay open two hours longer, and students study after dark.",
    },
    FeaturedStory {
        title: "A Classroom on Wheels",
        author: "Editorial Team",
        body: "The STEM van reached its fifth school this term. Teachers who had \
               never touched a laptop now run weekly coding clubs on their own, \
               and two students qualified for the national science fair.",
    },
];
