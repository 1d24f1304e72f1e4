//! The Gravity Box landing page.

use leptos::prelude::*;

use crate::components::accordion::{Accordion, FaqItem};
use crate::components::contact_form::ContactForm;
use crate::components::lead_modal::{LeadModal, OpenModalButton};
use crate::components::navbar::Navbar;
use crate::components::system_selector::SystemSelector;
use crate::components::toast_stack::ToastStack;
use crate::util::capabilities::Capabilities;

#[derive(Clone, Copy)]
struct FeatureCard {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: &[FeatureCard] = &[
    FeatureCard {
        icon: "zap",
        title: "Автономне живлення",
        text: "Інвертор і акумулятори тримають дім у роботі під час відключень.",
    },
    FeatureCard { icon: "wifi", title: "Стабільний інтернет", text: "Резервний канал і Wi-Fi покриття без мертвих зон." },
    FeatureCard { icon: "shield", title: "Охорона", text: "Датчики, камери та сповіщення на телефон у реальному часі." },
    FeatureCard { icon: "home", title: "Розумний дім", text: "Сценарії освітлення, клімату та енергозбереження." },
];

const STEPS: &[(&str, &str)] = &[
    ("Консультація", "Обговорюємо потреби та бюджет."),
    ("Проєкт", "Підбираємо обладнання під ваш дім."),
    ("Монтаж", "Встановлюємо та налаштовуємо за один день."),
    ("Підтримка", "Сервіс і гарантія після запуску."),
];

const GALLERY: &[(&str, &str)] = &[
    ("/assets/gallery-1.jpg", "Щит живлення в приватному будинку"),
    ("/assets/gallery-2.jpg", "Серверна шафа з резервним каналом"),
    ("/assets/gallery-3.jpg", "Панель керування розумним домом"),
];

const FAQ: &[FaqItem] = &[
    FaqItem {
        id: "faq-1",
        question: "Скільки часу працює система без світла?",
        answer: "Залежить від ємності акумуляторів: типова конфігурація тримає базові потреби 8–12 годин.",
    },
    FaqItem {
        id: "faq-2",
        question: "Чи можна розширити систему пізніше?",
        answer: "Так, кожен модуль Gravity Box додається окремо без заміни вже встановленого обладнання.",
    },
    FaqItem {
        id: "faq-3",
        question: "Яка гарантія?",
        answer: "Два роки на обладнання та монтаж, сервісна підтримка протягом усього терміну.",
    },
];

/// Delay step between consecutive cards/steps, in ms.
const STAGGER_MS: usize = 150;

#[component]
pub fn LandingPage() -> impl IntoView {
    install_page_behavior();

    view! {
        <div id="top">
            <Navbar />
            <header class="hero pt-32 pb-20 bg-gradient-to-br from-orange-950 to-orange-800">
                <div class="container mx-auto px-6 grid md:grid-cols-2 gap-12 items-center">
                    <div>
                        <h1 class="text-5xl font-bold mb-6">"Gravity Box"</h1>
                        <p class="text-xl text-orange-200 mb-8">
                            "Живлення, інтернет, охорона та розумний дім в одній системі."
                        </p>
                        <div class="flex gap-4">
                            <OpenModalButton label="Замовити консультацію" id="openModal" />
                            <a href="#systems" class="btn border border-orange-400 px-8 py-3 rounded-lg">
                                "Дізнатися більше"
                            </a>
                        </div>
                    </div>
                    <SystemSelector />
                </div>
            </header>

            <section id="systems" class="py-20">
                <div class="container mx-auto px-6 grid md:grid-cols-4 gap-6">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(i, card)| {
                            view! {
                                <div
                                    class="card animate-card opacity-0 bg-orange-900/40 rounded-xl p-6"
                                    data-delay=(i * STAGGER_MS).to_string()
                                >
                                    <i data-lucide=card.icon class="w-8 h-8 text-orange-400 mb-4"></i>
                                    <h3 class="text-lg font-semibold mb-2">{card.title}</h3>
                                    <p class="text-orange-200">{card.text}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="process" class="py-20 bg-orange-950">
                <div class="container mx-auto px-6 space-y-6">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, (title, text))| {
                            view! {
                                <div class="animate-step opacity-0 flex gap-4" data-delay=(i * STAGGER_MS).to_string()>
                                    <span class="step-number">{i + 1}</span>
                                    <div>
                                        <h4 class="font-semibold">{*title}</h4>
                                        <p class="text-orange-200">{*text}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="gallery" class="py-20">
                <div class="container mx-auto px-6 grid md:grid-cols-3 gap-6">
                    {GALLERY
                        .iter()
                        .map(|(src, alt)| view! { <img class="lazy rounded-xl" data-src=*src alt=*alt /> })
                        .collect_view()}
                </div>
            </section>

            <section id="faq" class="py-20 bg-orange-950">
                <div class="container mx-auto px-6 max-w-3xl">
                    <h2 class="text-3xl font-bold mb-8">"Часті питання"</h2>
                    <Accordion items=FAQ />
                </div>
            </section>

            <section id="contact" class="py-20">
                <div class="container mx-auto px-6 space-y-8">
                    <h2 class="text-3xl font-bold">"Зв'яжіться з нами"</h2>
                    <ContactForm />
                    <div class="flex flex-wrap gap-4">
                        <button type="button" class="btn border border-orange-400 px-6 py-3 rounded-lg">
                            "Стати партнером"
                        </button>
                        <button type="button" class="btn border border-orange-400 px-6 py-3 rounded-lg">
                            "Скачати каталог"
                        </button>
                    </div>
                </div>
            </section>

            <footer class="py-8 text-center text-orange-300">"© Gravity Box"</footer>

            <LeadModal />
            <ToastStack />
        </div>
    }
}

/// Install the page-lifetime DOM listeners once the page is mounted.
fn install_page_behavior() {
    let caps = expect_context::<Capabilities>();

    #[cfg(feature = "hydrate")]
    {
        use crate::state::landing::LandingState;
        use crate::state::toast::ToastState;
        use crate::util::{effects, viewport};

        let landing = expect_context::<RwSignal<LandingState>>();
        let toasts = expect_context::<RwSignal<ToastState>>();
        // Reads no signals, so it runs exactly once after mount.
        Effect::new(move || {
            caps.icons.render();
            viewport::init_scroll_animations(caps.intersection_observer);
            viewport::init_lazy_images(caps.intersection_observer);
            viewport::install_smooth_scrolling();
            viewport::install_navbar_scroll(landing);
            effects::install_click_effects(toasts);
            effects::install_hover_effects();
            crate::exports::install(landing, toasts, caps.clone());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = caps;
}
