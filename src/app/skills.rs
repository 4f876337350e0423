use leptos::{html, prelude::*};

use crate::content::{Skill, SkillCategory, SkillIcon, SKILLS};
use crate::section::SectionId;

use super::reveal::use_reveal;

fn icon(icon: SkillIcon) -> &'static str {
    match icon {
        SkillIcon::Code => "</>",
        SkillIcon::Terminal => ">_",
        SkillIcon::Database => "🗄",
        SkillIcon::Palette => "🛠",
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(SectionId::Skills, section_ref);

    view! {
        <section
            id=SectionId::Skills.as_str()
            node_ref=section_ref
            class="py-20 bg-gray-50 dark:bg-gray-800"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl md:text-4xl font-bold text-center text-gray-900 dark:text-white mb-16">
                    "Skills"
                </h2>
                <div class="grid md:grid-cols-2 gap-8">
                    {SKILLS
                        .iter()
                        .map(|category| view! { <SkillCard category=category revealed=revealed /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(category: &'static SkillCategory, revealed: Signal<bool>) -> impl IntoView {
    view! {
        <div
            class="p-6 bg-white dark:bg-gray-900 rounded-xl shadow-lg transition-all duration-700"
            class=("opacity-0", move || !revealed.get())
            class=("translate-y-10", move || !revealed.get())
        >
            <div class="flex items-center mb-6">
                <span class="w-10 h-10 flex items-center justify-center rounded-lg bg-purple-100 dark:bg-purple-900/50 text-purple-600 dark:text-purple-400 font-mono mr-3">
                    {icon(category.icon)}
                </span>
                <h3 class="text-xl font-semibold text-gray-900 dark:text-white">
                    {category.title}
                </h3>
            </div>
            <div class="space-y-4">
                {category
                    .skills
                    .iter()
                    .map(|skill| view! { <SkillBar skill=*skill revealed=revealed /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Proficiency bar that fills from zero once the section is revealed.
#[component]
fn SkillBar(skill: Skill, revealed: Signal<bool>) -> impl IntoView {
    let width = move || {
        if revealed.get() {
            format!("{}%", skill.level.min(100))
        } else {
            "0%".to_string()
        }
    };
    view! {
        <div>
            <div class="flex justify-between mb-1 text-sm">
                <span class="text-gray-700 dark:text-gray-300">{skill.name}</span>
                <span class="text-gray-500 dark:text-gray-400">{format!("{}%", skill.level)}</span>
            </div>
            <div class="h-2 bg-gray-200 dark:bg-gray-700 rounded-full overflow-hidden">
                <div
                    class="h-full bg-gradient-to-r from-purple-500 to-pink-500 rounded-full transition-all duration-1000 ease-out"
                    style:width=width
                ></div>
            </div>
        </div>
    }
}
