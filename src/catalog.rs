use yew::prelude::*;

/// Every icon the site draws. Closed on purpose: new icons need a glyph and a
/// class here before a section can use them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Code,
    ShoppingCart,
    Settings,
    Palette,
    Search,
    Cpu,
    Megaphone,
    ChevronDown,
    Globe,
    Close,
    Send,
    Rocket,
    Target,
    Lightbulb,
    RefreshCw,
    Users,
}

impl Icon {
    pub fn class_name(self) -> &'static str {
        match self {
            Icon::Code => "icon-code",
            Icon::ShoppingCart => "icon-shopping-cart",
            Icon::Settings => "icon-settings",
            Icon::Palette => "icon-palette",
            Icon::Search => "icon-search",
            Icon::Cpu => "icon-cpu",
            Icon::Megaphone => "icon-megaphone",
            Icon::ChevronDown => "icon-chevron-down",
            Icon::Globe => "icon-globe",
            Icon::Close => "icon-close",
            Icon::Send => "icon-send",
            Icon::Rocket => "icon-rocket",
            Icon::Target => "icon-target",
            Icon::Lightbulb => "icon-lightbulb",
            Icon::RefreshCw => "icon-refresh",
            Icon::Users => "icon-users",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Code => "</>",
            Icon::ShoppingCart => "🛒",
            Icon::Settings => "⚙️",
            Icon::Palette => "🎨",
            Icon::Search => "🔍",
            Icon::Cpu => "🤖",
            Icon::Megaphone => "📣",
            Icon::ChevronDown => "⌄",
            Icon::Globe => "🌐",
            Icon::Close => "✕",
            Icon::Send => "➤",
            Icon::Rocket => "🚀",
            Icon::Target => "🎯",
            Icon::Lightbulb => "💡",
            Icon::RefreshCw => "🔄",
            Icon::Users => "👥",
        }
    }

    pub fn render(self, extra_class: &'static str) -> Html {
        html! {
            <i class={classes!("icon", self.class_name(), extra_class)} aria-hidden="true">
                {self.glyph()}
            </i>
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServiceEntry {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueProposition {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

// Display order
pub const SERVICES: [ServiceEntry; 6] = [
    ServiceEntry {
        icon: Icon::ShoppingCart,
        title: "Tiendas Online",
        description: "Soluciones de comercio electrónico personalizadas construidas para escalar",
    },
    ServiceEntry {
        icon: Icon::Settings,
        title: "Optimización Web",
        description: "Servicios de ajuste de rendimiento y mantenimiento continuo",
    },
    ServiceEntry {
        icon: Icon::Palette,
        title: "Diseño UX/UI",
        description: "Diseño centrado en el usuario que impulsa el compromiso",
    },
    ServiceEntry {
        icon: Icon::Search,
        title: "SEO y Posicionamiento",
        description: "Estrategias basadas en datos para máxima visibilidad",
    },
    ServiceEntry {
        icon: Icon::Cpu,
        title: "Automatización",
        description: "Soluciones inteligentes para la automatización de procesos",
    },
    ServiceEntry {
        icon: Icon::Megaphone,
        title: "Google Ads",
        description: "Gestión y optimización de campañas publicitarias para maximizar el ROI",
    },
];

pub const VALUE_PROPOSITIONS: [ValueProposition; 5] = [
    ValueProposition {
        icon: Icon::Rocket,
        title: "Soluciones Digitales Personalizadas",
        description: "No solo construimos sitios web; creamos herramientas estratégicas que impulsan el crecimiento empresarial, adaptadas a las necesidades específicas de cada empresa.",
    },
    ValueProposition {
        icon: Icon::Target,
        title: "Enfoque Orientado a Resultados",
        description: "Nuestros sitios web y tiendas online están optimizados para atraer clientes, mejorar la experiencia del usuario y aumentar las conversiones.",
    },
    ValueProposition {
        icon: Icon::Lightbulb,
        title: "Diseño Futurista y Funcionalidad Avanzada",
        description: "Creamos sitios web elegantes, intuitivos y de vanguardia que elevan la presencia de tu marca y mejoran la interacción con tus usuarios.",
    },
    ValueProposition {
        icon: Icon::RefreshCw,
        title: "Soporte y Mantenimiento Continuo",
        description: "Más allá de la entrega de proyectos, proporcionamos mejoras continuas y actualizaciones para mantener tu plataforma en constante evolución.",
    },
    ValueProposition {
        icon: Icon::Users,
        title: "Atención Personalizada y Compromiso",
        description: "Trabajamos estrechamente con cada cliente, asegurando una experiencia fluida, ágil y enfocada en resultados.",
    },
];

pub const STATS: [Stat; 4] = [
    Stat { value: "100+", label: "Proyectos Completados" },
    Stat { value: "50+", label: "Clientes Satisfechos" },
    Stat { value: "5+", label: "Años de Experiencia" },
    Stat { value: "24/7", label: "Soporte" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn services_keep_declared_order() {
        let titles: Vec<&str> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "Tiendas Online",
                "Optimización Web",
                "Diseño UX/UI",
                "SEO y Posicionamiento",
                "Automatización",
                "Google Ads",
            ]
        );
    }

    #[test]
    fn every_entry_has_copy() {
        for service in SERVICES.iter() {
            assert!(!service.description.is_empty(), "{} has no description", service.title);
        }
        for prop in VALUE_PROPOSITIONS.iter() {
            assert!(!prop.description.is_empty(), "{} has no description", prop.title);
        }
        assert_eq!(STATS.len(), 4);
        assert_eq!(STATS[3], Stat { value: "24/7", label: "Soporte" });
    }

    #[test]
    fn icon_classes_are_unique() {
        let icons = [
            Icon::Code, Icon::ShoppingCart, Icon::Settings, Icon::Palette,
            Icon::Search, Icon::Cpu, Icon::Megaphone, Icon::ChevronDown,
            Icon::Globe, Icon::Close, Icon::Send, Icon::Rocket,
            Icon::Target, Icon::Lightbulb, Icon::RefreshCw, Icon::Users,
        ];
        let classes: HashSet<&str> = icons.iter().map(|icon| icon.class_name()).collect();
        assert_eq!(classes.len(), icons.len());
        assert!(icons.iter().all(|icon| !icon.glyph().is_empty()));
    }
}
