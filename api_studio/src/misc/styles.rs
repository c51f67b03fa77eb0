/// Static style catalog. Read-only reference data; the selected style's
/// prompt is concatenated into the user's free-text instructions.
pub struct StyleOption {
    pub id: &'static str,
    pub name: &'static str,
    pub prompt: &'static str,
}

pub const STYLE_OPTIONS: &[StyleOption] = &[
    StyleOption {
        id: "modern",
        name: "Modern",
        prompt: "Transform this space into a modern, sophisticated interior. Prioritize clean straight lines, smooth surfaces and an absence of clutter. Use a neutral palette (whites, grays, beiges) with one strong, strategic accent color. Incorporate materials such as metal (chromed steel, brushed nickel), glass and exposed concrete. Furniture should be low-profile with simple, functional design.",
    },
    StyleOption {
        id: "minimalist",
        name: "Minimalist",
        prompt: "Apply a minimalist design to this space, focused on the idea that less is more. Use a strictly monochromatic or neutral palette. The room must be extremely clean and organized, every item with a clear purpose. Use abundant natural light and ultra-simplified, unornamented furniture.",
    },
    StyleOption {
        id: "industrial",
        name: "Industrial",
        prompt: "Convert this space to an industrial style inspired by lofts and warehouses. Expose structural elements such as brick, piping and metal beams. Use raw materials like concrete, steel and reclaimed wood. Keep the palette sober with grays, blacks and browns. Furniture should be sturdy and functional, with metal and leather pieces.",
    },
    StyleOption {
        id: "bohemian",
        name: "Bohemian",
        prompt: "Create a free, eclectic bohemian atmosphere. Mix patterns, textures and vibrant colors. Use natural materials such as rattan, linen and cotton. Add many plants of different sizes to bring the room to life. Furniture should be comfortable and inviting, with a collection of vintage and handcrafted pieces, ethnic-patterned rugs and plenty of cushions.",
    },
    StyleOption {
        id: "scandinavian",
        name: "Scandinavian",
        prompt: "Adopt the Scandinavian (hygge) style, focused on simplicity, functionality and coziness. Use a light, neutral palette dominated by white, light gray and pastels. Use light wood on floors and furniture. Bring in cozy textures such as wool, faux fur and linen. Lighting should be soft and plentiful, maximizing natural light.",
    },
    StyleOption {
        id: "farmhouse",
        name: "Modern Farmhouse",
        prompt: "Transform the interior into a modern farmhouse style. Combine countryside charm with clean lines. Use natural wood, stone and vintage elements. Keep the palette warm and neutral with whites, beiges and grays. Furniture should be comfortable and sturdy. Add elements like ceiling wood beams, barn doors and natural fabrics such as linen and plaid cotton.",
    },
    StyleOption {
        id: "japandi",
        name: "Japandi",
        prompt: "Apply the Japandi style, a fusion of Japanese minimalism and Scandinavian functionality. Use a calm, neutral palette with earthy tones and touches of black for contrast. Incorporate natural materials such as light wood (oak, pine), bamboo and handmade ceramics. Furniture should be simple-lined, low and functional. Prioritize order and the absence of excess, creating a sanctuary of calm.",
    },
    StyleOption {
        id: "mid-century",
        name: "Mid-Century",
        prompt: "Redecorate in Mid-Century Modern style. Use iconic furniture with organic lines and tapered legs. Incorporate walnut and teak. Mix neutral and earthy tones with bold colors such as burnt orange, avocado green or petrol blue. Add geometric patterns in rugs or cushions and sculptural brass or metal lighting.",
    },
    StyleOption {
        id: "coastal",
        name: "Coastal",
        prompt: "Create a coastal, beach-house interior. Use a light, airy palette with plenty of white, navy blue, sand and seafoam tones. Maximize natural light. Use materials such as linen, cotton, sisal and whitewashed wood. Furniture should be comfortable and casual, with subtle nautical touches and natural textures.",
    },
    StyleOption {
        id: "art-deco",
        name: "Art Deco",
        prompt: "Introduce the glamour of Art Deco. Use strong geometric shapes, symmetrical patterns (zig-zags, fans) and rich colors such as black, gold, deep blue and emerald green. Incorporate luxurious materials like velvet, lacquer, polished brass and marble. Furniture should be elegant and sculptural, with ornate mirrors and dramatic lighting.",
    },
    StyleOption {
        id: "transitional",
        name: "Transitional",
        prompt: "Create a transitional design that joins the best of traditional and modern. Use a relaxing neutral palette of grays, beiges and whites. Furniture keeps classic lines with a simplified silhouette. Mix textures, such as a linen sofa with a dark metal coffee table. The result should be elegant, timeless and comfortable without being ornate or austere.",
    },
    StyleOption {
        id: "hollywood-regency",
        name: "Hollywood Regency",
        prompt: "Apply the Hollywood Regency style for a dramatic, luxurious look. Use a bold, high-contrast palette such as black and white with vibrant touches of pink, turquoise or purple. Furniture should be sumptuous, with lacquered, mirrored and tufted finishes. Incorporate luxury fabrics like velvet and silk, gold or brass metallic details and spectacular light fixtures.",
    },
    StyleOption {
        id: "biophilic",
        name: "Biophilic",
        prompt: "Create a biophilic design that maximizes connection with nature. Use an abundance of indoor plants, natural light and ventilation. The palette should be nature-inspired with greens, blues and earthy tones. Incorporate natural materials such as wood, stone, bamboo and organic fabrics. The goal is a restorative, healthy space that improves well-being.",
    },
    StyleOption {
        id: "maximalist",
        name: "Maximalist",
        prompt: "Adopt a maximalist style celebrating opulence and personal expression. Use rich, bold colors, mix multiple patterns (floral, geometric, animal) and combine textures such as velvet, silk and brocade. Fill the space with a curated collection of art, decorative objects and furniture from different eras, intentionally and cohesively.",
    },
    StyleOption {
        id: "organic-modern",
        name: "Organic Modern",
        prompt: "Apply an organic modern style that softens modernism's clean lines with natural shapes and organic textures. Use a warm, neutral palette. Choose furniture with soft, curved silhouettes in natural materials such as light wood, rattan, wool and stone. The focus is a serene, minimalist yet welcoming space with a sense of connection to nature.",
    },
];

pub fn find_style(id: &str) -> Option<&'static StyleOption> {
    STYLE_OPTIONS.iter().find(|style| style.id == id)
}
