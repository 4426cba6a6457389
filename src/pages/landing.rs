//! Landing page

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::Header;

/// A pricing plan shown on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub cta_label: &'static str,
    pub cta_href: &'static str,
    pub highlighted: bool,
}

/// Plans are presentational only; nothing enforces them
pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Free",
        price: "$0",
        features: &["5 documents per month", "Basic chat", "Text and markdown files"],
        cta_label: "Get Started",
        cta_href: "/auth?mode=signup",
        highlighted: false,
    },
    PricingTier {
        name: "Pro",
        price: "$19",
        features: &[
            "Unlimited documents",
            "PDF, Word, PowerPoint and Excel",
            "Priority responses",
        ],
        cta_label: "Start Free Trial",
        cta_href: "/auth?mode=signup",
        highlighted: true,
    },
    PricingTier {
        name: "Team",
        price: "$49",
        features: &["Everything in Pro", "Shared workspaces", "Admin controls"],
        cta_label: "Contact Sales",
        cta_href: "/auth",
        highlighted: false,
    },
];

/// Marketing page with links into the auth flow
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Title text="DocChat - Chat with your documents" />
        <div class="min-h-screen flex flex-col">
            <Header />

            // Hero section
            <section class="flex-1 flex items-center justify-center px-4 py-20">
                <div class="max-w-4xl mx-auto text-center">
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 animate-slide-up">
                        "Chat with your "
                        <span class="bg-gradient-to-r from-indigo-400 to-fuchsia-400 bg-clip-text text-transparent">
                            "documents"
                        </span>
                    </h1>

                    <p class="text-lg md:text-xl text-slate-400 mb-12 max-w-2xl mx-auto">
                        "Upload PDFs, Word documents, presentations and spreadsheets, "
                        "then ask questions, get summaries and pull out key insights."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a
                            href="/auth?mode=signup"
                            class="px-8 py-4 bg-indigo-600 hover:bg-indigo-700 rounded-xl text-lg font-semibold
                                   transition-all hover:scale-105"
                        >
                            "Start for Free"
                        </a>
                        <a
                            href="/auth"
                            class="px-8 py-4 bg-slate-800 hover:bg-slate-700 border border-slate-700
                                   rounded-xl text-lg font-semibold transition-all hover:scale-105"
                        >
                            "Sign In"
                        </a>
                    </div>
                </div>
            </section>

            // Features section
            <section class="py-20 px-4 bg-slate-900/50">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-3xl font-bold text-center mb-12">"Everything you need"</h2>

                    <div class="grid md:grid-cols-3 gap-8">
                        <FeatureCard
                            icon="📤"
                            title="Drag-and-drop uploads"
                            description="Drop PDF, DOCX, PPTX, XLSX, TXT and MD files up to 10MB each"
                        />
                        <FeatureCard
                            icon="💬"
                            title="Conversational answers"
                            description="Ask follow-up questions with the whole conversation as context"
                        />
                        <FeatureCard
                            icon="🔒"
                            title="Private by default"
                            description="Documents stay in your browser session and are never stored"
                        />
                    </div>
                </div>
            </section>

            // Pricing section
            <section class="py-20 px-4">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-3xl font-bold text-center mb-12">"Simple pricing"</h2>
                    <div class="grid md:grid-cols-3 gap-8">
                        {PRICING_TIERS.iter().map(|tier| view! { <PricingCard tier=*tier /> }).collect::<Vec<_>>()}
                    </div>
                </div>
            </section>

            <footer class="py-8 text-center text-sm text-slate-600 border-t border-slate-900">
                "DocChat"
            </footer>
        </div>
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="p-6 bg-slate-800/50 border border-slate-700 rounded-2xl">
            <div class="text-4xl mb-4">{icon}</div>
            <h3 class="text-xl font-semibold mb-2">{title}</h3>
            <p class="text-slate-400">{description}</p>
        </div>
    }
}

#[component]
fn PricingCard(tier: PricingTier) -> impl IntoView {
    let border = if tier.highlighted {
        "border-indigo-500 shadow-lg shadow-indigo-500/20"
    } else {
        "border-slate-700"
    };

    view! {
        <div class=format!("p-8 bg-slate-900 border rounded-2xl flex flex-col {}", border)>
            <h3 class="text-xl font-semibold">{tier.name}</h3>
            <p class="mt-4 mb-6">
                <span class="text-4xl font-bold">{tier.price}</span>
                <span class="text-slate-500">"/month"</span>
            </p>
            <ul class="flex-1 space-y-2 mb-8 text-slate-300">
                {tier.features.iter().map(|f| view! { <li>"✓ " {*f}</li> }).collect::<Vec<_>>()}
            </ul>
            <a
                href=tier.cta_href
                class="block text-center px-6 py-3 rounded-xl font-medium bg-indigo-600 hover:bg-indigo-700 transition-colors"
            >
                {tier.cta_label}
            </a>
        </div>
    }
}
