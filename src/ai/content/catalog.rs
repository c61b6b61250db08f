//! Built-in Template Catalog
//!
//! 組み込みのカテゴリとテンプレート構成データ

use super::template::EngagementTier::{self, High, Medium as Mid};
use super::template::LengthTier::{self, Long, Medium, Short};
use super::template::{TemplateCategory, TemplateStructure};

/// (ID兼表示名, 説明, タグ, アイコン, 色)
type CategorySeed = (&'static str, &'static str, &'static [&'static str], &'static str, &'static str);

const CATEGORIES: &[CategorySeed] = &[
    ("Personal Story", "Share personal experiences and transformations", &["inspirational", "authentic", "engagement"], "👤", "#3B82F6"),
    ("Lessons Learned", "Share professional insights and key learnings", &["educational", "wisdom", "professional"], "💡", "#10B981"),
    ("Industry Insights", "Share industry trends and expert analysis", &["technical", "analytical", "thought-leadership"], "📊", "#8B5CF6"),
    ("Career Advice", "Provide guidance for professional development", &["educational", "mentoring", "growth"], "🚀", "#F59E0B"),
    ("Leadership", "Leadership principles and management insights", &["professional", "management", "inspiration"], "👑", "#EF4444"),
    ("Success Stories", "Share achievements and case studies", &["inspirational", "proof", "achievement"], "🏆", "#06B6D4"),
    ("Motivation", "Inspire and motivate your audience", &["inspirational", "engagement", "energy"], "⚡", "#EC4899"),
    ("Business Strategy", "Strategic insights and business analysis", &["technical", "analytical", "strategic"], "🎯", "#6366F1"),
    ("Technology Trends", "Tech insights and digital transformation", &["technical", "innovation", "future"], "🔬", "#059669"),
    ("Team Building", "Team dynamics and collaboration insights", &["professional", "collaboration", "culture"], "🤝", "#DC2626"),
    ("Work-Life Balance", "Balance, productivity, and wellness", &["wellness", "lifestyle", "personal"], "⚖️", "#7C3AED"),
    ("Innovation", "Creative thinking and breakthrough ideas", &["creative", "innovation", "future"], "💫", "#0891B2"),
    ("Networking", "Professional relationships and connections", &["professional", "relationships", "growth"], "🌐", "#BE185D"),
    ("Problem Solving", "Solutions and methodical approaches", &["analytical", "solutions", "process"], "🔧", "#059669"),
    ("Communication", "Effective communication strategies", &["professional", "skills", "clarity"], "💬", "#7C2D12"),
    ("Sales & Marketing", "Sales strategies and marketing insights", &["business", "growth", "strategy"], "📈", "#9333EA"),
    ("Finance & Business", "Financial insights and business metrics", &["analytical", "business", "data"], "💰", "#0D9488"),
    ("Customer Experience", "Customer service and satisfaction insights", &["service", "customer", "quality"], "😊", "#DB2777"),
    ("Digital Marketing", "Digital strategies and online marketing", &["technical", "marketing", "digital"], "📱", "#2563EB"),
    ("Data & Analytics", "Data insights and analytical thinking", &["technical", "analytical", "data"], "📊", "#7C3AED"),
    ("Entrepreneurship", "Startup insights and business building", &["business", "startup", "innovation"], "🚀", "#EA580C"),
    ("Mental Health & Wellness", "Workplace wellness and mental health", &["wellness", "health", "personal"], "🧠", "#059669"),
    ("Productivity", "Efficiency tips and time management", &["efficiency", "process", "optimization"], "⏱️", "#DC2626"),
    ("Remote Work", "Remote work insights and distributed teams", &["remote", "flexibility", "modern"], "🏠", "#0891B2"),
    ("Industry News", "Current events and industry updates", &["news", "current", "relevant"], "📰", "#6366F1"),
];

/// テンプレート構成の元データ
struct Seed {
    id: &'static str,
    title: &'static str,
    body: &'static str,
    placeholders: &'static [&'static str],
    engagement: EngagementTier,
    length: LengthTier,
    hashtags: &'static str,
    preview: &'static str,
}

const PERSONAL_STORY: &[Seed] = &[
    Seed {
        id: "ps_001",
        title: "Challenge to Success Journey",
        body: "Three years ago, I {challenge}. Today, I {current_state}. Here's what I learned: {lesson}. The key insight: {insight}. What challenges have shaped your career?",
        placeholders: &["challenge", "current_state", "lesson", "insight"],
        engagement: High,
        length: Medium,
        hashtags: "#PersonalGrowth #CareerJourney #Lessons",
        preview: "Share your transformation story from struggle to success...",
    },
    Seed {
        id: "ps_002",
        title: "Belief Transformation",
        body: "I used to believe {old_belief}. Then {pivotal_moment} happened. Now I understand that {new_perspective}. This shift changed everything: {impact}. Sometimes our biggest assumptions need questioning.",
        placeholders: &["old_belief", "pivotal_moment", "new_perspective", "impact"],
        engagement: High,
        length: Medium,
        hashtags: "#Mindset #Growth #Transformation",
        preview: "Tell the story of how your perspective fundamentally changed...",
    },
    Seed {
        id: "ps_003",
        title: "Moment of Realization",
        body: "The moment I realized {realization} was when {situation}. It felt {emotion}, but it taught me {lesson}. Now I approach {area} completely differently: {new_approach}.",
        placeholders: &["realization", "situation", "emotion", "lesson", "area", "new_approach"],
        engagement: Mid,
        length: Long,
        hashtags: "#PersonalDevelopment #Lessons #Growth",
        preview: "Share a pivotal moment that changed your approach...",
    },
    Seed {
        id: "ps_004",
        title: "Failure to Learning",
        body: "My biggest failure was {failure}. I felt {emotion} and wanted to {initial_reaction}. Instead, I {what_you_did}. The result? {outcome}. Failure isn't the opposite of success—it's part of it.",
        placeholders: &["failure", "emotion", "initial_reaction", "what_you_did", "outcome"],
        engagement: High,
        length: Medium,
        hashtags: "#Resilience #FailureToSuccess #Growth",
        preview: "Turn your biggest setback into a learning story...",
    },
    Seed {
        id: "ps_005",
        title: "Overcoming Limitations",
        body: "Growing up, I was told {limiting_belief}. For years, I {how_it_affected_you}. Then I met {person_or_situation} who showed me {new_perspective}. Today, I {current_state}. Your background doesn't define your future.",
        placeholders: &["limiting_belief", "how_it_affected_you", "person_or_situation", "new_perspective", "current_state"],
        engagement: High,
        length: Long,
        hashtags: "#Inspiration #OvercomingLimits #Success",
        preview: "Share how you overcame limiting beliefs about yourself...",
    },
    Seed {
        id: "ps_006",
        title: "Risk Taking Story",
        body: "Last {timeframe}, I took a risk: {risk}. People said {criticism}. My family worried about {concern}. But I knew {conviction}. The outcome? {result}. Sometimes you have to bet on yourself.",
        placeholders: &["timeframe", "risk", "criticism", "concern", "conviction", "result"],
        engagement: Mid,
        length: Long,
        hashtags: "#TakingRisks #Entrepreneurship #Courage",
        preview: "Tell about a time you took a leap of faith...",
    },
    Seed {
        id: "ps_007",
        title: "Difficult Conversation Impact",
        body: "The hardest conversation I ever had was {situation}. I had to {what_you_had_to_do}. It was difficult because {why}. But it led to {positive_outcome}. Difficult conversations create breakthrough moments.",
        placeholders: &["situation", "what_you_had_to_do", "why", "positive_outcome"],
        engagement: Mid,
        length: Medium,
        hashtags: "#Courage #Communication #Leadership",
        preview: "Share how a tough conversation led to positive change...",
    },
    Seed {
        id: "ps_008",
        title: "Memorable Learning Moment",
        body: "I'll never forget {memorable_moment}. It was {context}. In that moment, I learned {lesson}. This experience shaped how I {impact_on_behavior}. Some lessons can only be learned through experience.",
        placeholders: &["memorable_moment", "context", "lesson", "impact_on_behavior"],
        engagement: Mid,
        length: Medium,
        hashtags: "#LifeLessons #Wisdom #Experience",
        preview: "Share an unforgettable moment that taught you something...",
    },
    Seed {
        id: "ps_009",
        title: "Unique Journey Celebration",
        body: "When I started {beginning}, I had {initial_state}. Everyone around me {others_situation}. But I believed {belief}. After {timeframe}, I {achievement}. Your journey is unique—embrace it.",
        placeholders: &["beginning", "initial_state", "others_situation", "belief", "timeframe", "achievement"],
        engagement: Mid,
        length: Long,
        hashtags: "#Authenticity #Journey #Success",
        preview: "Celebrate what makes your path different from others...",
    },
    Seed {
        id: "ps_010",
        title: "Mentorship and Wisdom",
        body: "The person who changed my perspective was {person}. They told me {advice_or_insight}. At first, I {initial_reaction}. But over time, I realized {realization}. This wisdom now guides {how_it_guides_you}.",
        placeholders: &["person", "advice_or_insight", "initial_reaction", "realization", "how_it_guides_you"],
        engagement: High,
        length: Medium,
        hashtags: "#Mentorship #WisdomShared #Growth",
        preview: "Honor someone who shaped your thinking...",
    },
];

const LESSONS_LEARNED: &[Seed] = &[
    Seed {
        id: "ll_001",
        title: "Top Professional Lessons",
        body: "After {timeframe} in {field_or_role}, here are the 3 most important lessons I've learned: 1) {first_lesson} 2) {second_lesson} 3) {third_lesson}. Which of these resonates most with your experience?",
        placeholders: &["timeframe", "field_or_role", "first_lesson", "second_lesson", "third_lesson"],
        engagement: High,
        length: Medium,
        hashtags: "#Leadership #Experience #Lessons",
        preview: "Share your top 3 professional lessons learned...",
    },
    Seed {
        id: "ll_002",
        title: "Most Valuable Mistake",
        body: "The mistake that taught me the most was {mistake}. I thought {wrong_assumption}. The reality was {what_actually_happened}. Now I always {new_approach}. What's the most valuable mistake you've made?",
        placeholders: &["mistake", "wrong_assumption", "what_actually_happened", "new_approach"],
        engagement: High,
        length: Medium,
        hashtags: "#LearningFromFailure #Growth #Mistakes",
        preview: "Turn your biggest mistake into a teaching moment...",
    },
    Seed {
        id: "ll_003",
        title: "Advice to Younger Self",
        body: "If I could go back and tell my younger self one thing, it would be: {advice}. Back then, I was {past_mindset}. I wish I had known {knowledge}. This would have saved me {what_it_would_have_saved}. What advice would you give your past self?",
        placeholders: &["advice", "past_mindset", "knowledge", "what_it_would_have_saved"],
        engagement: High,
        length: Long,
        hashtags: "#Reflection #Advice #Wisdom",
        preview: "Share wisdom you wish you'd known earlier...",
    },
    Seed {
        id: "ll_004",
        title: "Best Career Advice Received",
        body: "The best career advice I ever received was '{advice}' from {source}. Initially, I {initial_reaction}. But when I applied it to {situation}, the result was {outcome}. Simple advice often has the deepest impact.",
        placeholders: &["advice", "source", "initial_reaction", "situation", "outcome"],
        engagement: High,
        length: Medium,
        hashtags: "#CareerAdvice #Mentorship #Success",
        preview: "Share the most impactful advice you've received...",
    },
    Seed {
        id: "ll_005",
        title: "People Management Insights",
        body: "Working with {type_of_people_or_situation} taught me that {lesson}. Before this, I believed {old_belief}. Now I understand {new_understanding}. This shift improved {area_of_improvement}. Perspective changes everything.",
        placeholders: &["type_of_people_or_situation", "lesson", "old_belief", "new_understanding", "area_of_improvement"],
        engagement: Mid,
        length: Long,
        hashtags: "#Teamwork #Understanding #Management",
        preview: "Share what working with others taught you...",
    },
    Seed {
        id: "ll_006",
        title: "Project Learning Experience",
        body: "The project that taught me the most was {project}. We faced {challenge}. I learned {first_lesson}, {second_lesson}, and {third_lesson}. The biggest surprise was {surprise}. Complex projects teach simple truths.",
        placeholders: &["project", "challenge", "first_lesson", "second_lesson", "third_lesson", "surprise"],
        engagement: Mid,
        length: Long,
        hashtags: "#ProjectManagement #Learning #Experience",
        preview: "Extract lessons from a challenging project...",
    },
    Seed {
        id: "ll_007",
        title: "Professional Regret Lesson",
        body: "My biggest professional regret is {regret}. I should have {what_you_should_have_done}. Instead, I {what_you_actually_did}. This taught me {lesson}. Now I prioritize {priority}. Regrets are lessons in disguise.",
        placeholders: &["regret", "what_you_should_have_done", "what_you_actually_did", "lesson", "priority"],
        engagement: Mid,
        length: Long,
        hashtags: "#Reflection #ProfessionalGrowth #Lessons",
        preview: "Turn professional regret into wisdom for others...",
    },
    Seed {
        id: "ll_008",
        title: "Skill Development Insight",
        body: "The skill I wish I had developed earlier is {skill}. I underestimated its importance because {reason}. When I finally focused on it, {result}. It impacted {areas_of_impact}. Invest in skills before you need them.",
        placeholders: &["skill", "reason", "result", "areas_of_impact"],
        engagement: Mid,
        length: Medium,
        hashtags: "#SkillDevelopment #Growth #Career",
        preview: "Highlight a skill you wish you'd developed sooner...",
    },
    Seed {
        id: "ll_009",
        title: "Failure Teaching Success",
        body: "Failure taught me {lesson} in a way success never could. After {failure}, I realized {realization}. This changed how I approach {area}. Now I see challenges as {new_perspective}. Failure is the best teacher.",
        placeholders: &["lesson", "failure", "realization", "area", "new_perspective"],
        engagement: High,
        length: Medium,
        hashtags: "#Resilience #FailureToSuccess #Learning",
        preview: "Show how failure became your greatest teacher...",
    },
    Seed {
        id: "ll_010",
        title: "Counterintuitive Insight",
        body: "The most counterintuitive thing I've learned is {counterintuitive_insight}. Most people think {common_belief}. But in reality, {truth}. This applies to {application}. Sometimes the opposite approach works best.",
        placeholders: &["counterintuitive_insight", "common_belief", "truth", "application"],
        engagement: High,
        length: Medium,
        hashtags: "#CounterIntuitive #Strategy #Wisdom",
        preview: "Share surprising wisdom that goes against conventional thinking...",
    },
];

const INDUSTRY_INSIGHTS: &[Seed] = &[Seed {
    id: "ii_001",
    title: "Market Shift Analysis",
    body: "The {industry} landscape is shifting. Here's what most people are missing: {insight}. While everyone focuses on {common_focus}, the real opportunity is in {real_opportunity}. Companies that adapt will {prediction}.",
    placeholders: &["industry", "insight", "common_focus", "real_opportunity", "prediction"],
    engagement: Mid,
    length: Medium,
    hashtags: "#Industry #Innovation #Trends",
    preview: "Share what others are missing in your industry...",
}];

const CAREER_ADVICE: &[Seed] = &[Seed {
    id: "ca_001",
    title: "Hidden Career Advice",
    body: "The career advice no one gives you: {advice}. Most people focus on {common_focus}. But the real career accelerator is {real_accelerator}. I learned this when {learning_moment}. Apply this to {application}.",
    placeholders: &["advice", "common_focus", "real_accelerator", "learning_moment", "application"],
    engagement: High,
    length: Medium,
    hashtags: "#CareerGrowth #ProfessionalDevelopment #Advice",
    preview: "Share career advice that's not commonly given...",
}];

const LEADERSHIP: &[Seed] = &[
    Seed {
        id: "ld_001",
        title: "Leadership Philosophy",
        body: "My leadership philosophy is simple: {philosophy}. I learned this when {learning_moment}. It changed how I {change_in_approach}. The result? {result}. Leadership isn't about being in charge—it's about taking care of those in your charge.",
        placeholders: &["philosophy", "learning_moment", "change_in_approach", "result"],
        engagement: High,
        length: Medium,
        hashtags: "#Leadership #Management #TeamBuilding",
        preview: "Share your core leadership philosophy and insights...",
    },
    Seed {
        id: "ld_002",
        title: "Difficult Leadership Decision",
        body: "The hardest decision I had to make as a leader was {decision}. The stakes were {stakes}. I considered {options}. Ultimately, I chose to {choice} because {reasoning}. Leadership means making tough calls when no one else will.",
        placeholders: &["decision", "stakes", "options", "choice", "reasoning"],
        engagement: High,
        length: Long,
        hashtags: "#Leadership #DecisionMaking #Responsibility",
        preview: "Share a tough leadership decision and the lessons learned...",
    },
    Seed {
        id: "ld_003",
        title: "Team Transformation",
        body: "When I inherited {team_situation}, the team was {initial_state}. I implemented {changes}. The biggest challenge was {challenge}. Today, the team {current_state}. Great leaders create more leaders, not followers.",
        placeholders: &["team_situation", "initial_state", "changes", "challenge", "current_state"],
        engagement: Mid,
        length: Long,
        hashtags: "#Leadership #TeamDevelopment #Transformation",
        preview: "Tell the story of how you transformed a team...",
    },
];

const SUCCESS_STORIES: &[Seed] = &[
    Seed {
        id: "ss_001",
        title: "Against All Odds",
        body: "Everyone said {what_people_said}. The odds were {odds}. But I believed {belief}. I started with {starting_point}. After {timeframe}, we achieved {achievement}. Sometimes the best opportunities come disguised as impossible challenges.",
        placeholders: &["what_people_said", "odds", "belief", "starting_point", "timeframe", "achievement"],
        engagement: High,
        length: Long,
        hashtags: "#Success #Perseverance #Achievement",
        preview: "Share your against-all-odds success story...",
    },
    Seed {
        id: "ss_002",
        title: "Breakthrough Moment",
        body: "For months, we struggled with {problem}. We tried {attempts}. Then came the breakthrough: {breakthrough}. The key insight was {insight}. This led to {result}. Sometimes the biggest breakthroughs come after the longest struggles.",
        placeholders: &["problem", "attempts", "breakthrough", "insight", "result"],
        engagement: High,
        length: Medium,
        hashtags: "#Success #Breakthrough #Innovation",
        preview: "Share a moment when everything clicked and success followed...",
    },
    Seed {
        id: "ss_003",
        title: "Team Success Achievement",
        body: "Our team accomplished something incredible: {achievement}. It started when {beginning}. The turning point was {turning_point}. What made it special was {special_factor}. Success is sweeter when shared with an amazing team.",
        placeholders: &["achievement", "beginning", "turning_point", "special_factor"],
        engagement: Mid,
        length: Medium,
        hashtags: "#TeamSuccess #Achievement #Collaboration",
        preview: "Celebrate a major team accomplishment...",
    },
];

const MOTIVATION: &[Seed] = &[
    Seed {
        id: "mt_001",
        title: "Monday Motivation",
        body: "Here's what keeps me motivated every Monday: {motivation}. When I feel overwhelmed, I remember {reminder}. This week, I'm focusing on {focus}. What's driving you this week? Let's make it count.",
        placeholders: &["motivation", "reminder", "focus"],
        engagement: High,
        length: Short,
        hashtags: "#MondayMotivation #Focus #Goals",
        preview: "Start the week with motivational energy...",
    },
    Seed {
        id: "mt_002",
        title: "Overcoming Obstacles",
        body: "When faced with {obstacle}, remember this: {motivation}. I've learned that {lesson}. The key is to {key_action}. You're stronger than you think, and closer to success than you realize.",
        placeholders: &["obstacle", "motivation", "lesson", "key_action"],
        engagement: High,
        length: Medium,
        hashtags: "#Motivation #Resilience #Strength",
        preview: "Motivate others to overcome their challenges...",
    },
    Seed {
        id: "mt_003",
        title: "Dream Achievement Inspiration",
        body: "Your dreams are not too big—{encouragement}. I once thought {limiting_thought}, but I discovered {discovery}. The path forward is {path}. Start today, start small, but start.",
        placeholders: &["encouragement", "limiting_thought", "discovery", "path"],
        engagement: High,
        length: Medium,
        hashtags: "#Dreams #Inspiration #Action",
        preview: "Inspire others to pursue their biggest dreams...",
    },
];

const BUSINESS_STRATEGY: &[Seed] = &[
    Seed {
        id: "bs_001",
        title: "Strategic Pivot Success",
        body: "When {market_change} happened, we had to pivot. Our original strategy was {original_strategy}. The new approach: {new_approach}. The result? {result}. In business, adaptability beats perfection every time.",
        placeholders: &["market_change", "original_strategy", "new_approach", "result"],
        engagement: Mid,
        length: Long,
        hashtags: "#Strategy #BusinessPivot #Adaptability",
        preview: "Share how strategic thinking led to business success...",
    },
    Seed {
        id: "bs_002",
        title: "Competitive Advantage Discovery",
        body: "We discovered our competitive advantage by {discovery_method}. While competitors focused on {competitor_focus}, we doubled down on {our_focus}. This differentiation led to {outcome}. Find your unique value and own it.",
        placeholders: &["discovery_method", "competitor_focus", "our_focus", "outcome"],
        engagement: Mid,
        length: Medium,
        hashtags: "#Strategy #CompetitiveAdvantage #Differentiation",
        preview: "Explain how you found and leveraged your competitive edge...",
    },
    Seed {
        id: "bs_003",
        title: "Market Opportunity Analysis",
        body: "I spotted an opportunity when I noticed {observation}. The market was missing {gap}. Our solution: {solution}. The key insight: {insight}. Sometimes the biggest opportunities hide in plain sight.",
        placeholders: &["observation", "gap", "solution", "insight"],
        engagement: Mid,
        length: Medium,
        hashtags: "#Strategy #MarketOpportunity #Innovation",
        preview: "Share how you identified and seized a market opportunity...",
    },
];

const PRODUCTIVITY: &[Seed] = &[
    Seed {
        id: "pr_001",
        title: "Time Management System",
        body: "My productivity system: {system}. I start each day by {daily_routine}. The game-changer was {game_changer}. This approach helps me {benefit}. Time is our most valuable asset—invest it wisely.",
        placeholders: &["system", "daily_routine", "game_changer", "benefit"],
        engagement: High,
        length: Medium,
        hashtags: "#Productivity #TimeManagement #Efficiency",
        preview: "Share your productivity system and time management tips...",
    },
    Seed {
        id: "pr_002",
        title: "Focus and Deep Work",
        body: "To achieve deep focus, I {focus_method}. My biggest distraction used to be {distraction}. Now I {solution}. The result: {result}. Deep work creates disproportionate value.",
        placeholders: &["focus_method", "distraction", "solution", "result"],
        engagement: Mid,
        length: Medium,
        hashtags: "#Productivity #Focus #DeepWork",
        preview: "Share strategies for maintaining focus and doing deep work...",
    },
    Seed {
        id: "pr_003",
        title: "Productivity Mistake Lessons",
        body: "My biggest productivity mistake: {mistake}. I thought {wrong_assumption}. This led to {consequence}. What I learned: {lesson}. Now I {current_approach}. Learn from my mistakes.",
        placeholders: &["mistake", "wrong_assumption", "consequence", "lesson", "current_approach"],
        engagement: High,
        length: Medium,
        hashtags: "#Productivity #Lessons #Efficiency",
        preview: "Share productivity mistakes and the lessons learned...",
    },
];

/// カテゴリ別のテンプレート構成
const STRUCTURES: &[(&str, &[Seed])] = &[
    ("Personal Story", PERSONAL_STORY),
    ("Lessons Learned", LESSONS_LEARNED),
    ("Industry Insights", INDUSTRY_INSIGHTS),
    ("Career Advice", CAREER_ADVICE),
    ("Leadership", LEADERSHIP),
    ("Success Stories", SUCCESS_STORIES),
    ("Motivation", MOTIVATION),
    ("Business Strategy", BUSINESS_STRATEGY),
    ("Productivity", PRODUCTIVITY),
];

/// 組み込みカテゴリ一覧
pub fn categories() -> Vec<TemplateCategory> {
    CATEGORIES
        .iter()
        .map(|(name, description, tags, icon, color)| TemplateCategory {
            id: name.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            icon: icon.to_string(),
            color: color.to_string(),
        })
        .collect()
}

/// 組み込みテンプレート一覧（カテゴリ順）
pub fn templates() -> Vec<TemplateStructure> {
    CATEGORIES
        .iter()
        .filter_map(|(category_id, ..)| {
            STRUCTURES
                .iter()
                .find(|(id, _)| id == category_id)
                .map(|(id, seeds)| (*id, *seeds))
        })
        .flat_map(|(category_id, seeds)| {
            seeds.iter().map(move |seed| TemplateStructure {
                id: seed.id.to_string(),
                title: seed.title.to_string(),
                category_id: category_id.to_string(),
                body_pattern: seed.body.to_string(),
                placeholders: seed.placeholders.iter().map(|p| p.to_string()).collect(),
                engagement: seed.engagement,
                length: seed.length,
                hashtag_hint: seed.hashtags.to_string(),
                preview: seed.preview.to_string(),
            })
        })
        .collect()
}
