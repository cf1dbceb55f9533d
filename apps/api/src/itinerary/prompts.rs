// LLM prompt constants for itinerary generation.

/// Used when the traveller lists no interests.
pub const DEFAULT_INTERESTS: &str = "general sightseeing, food, culture";

/// System prompt template. Replace: {days}, {city}, {interests}
pub const ITINERARY_SYSTEM_TEMPLATE: &str = "You are a meticulous travel assistant. \
Create a {days}-day itinerary for {city} based on these interests: {interests}. \
Rules:
- Output in Markdown with headings '## Day 1', '## Day 2', ...
- 4–6 bullet points per day with time hints (e.g., 9:00 AM — Gateway of India)
- Keep it realistic (nearby places on the same day)
- Include short local food suggestions and commute notes where helpful.
";

/// User turn sent alongside the system prompt.
pub const ITINERARY_USER_PROMPT: &str = "Plan my trip.";
