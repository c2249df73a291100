#![forbid(unsafe_code)]

//! The page stylesheet.
//!
//! Static layout and keyframe rules plus the reveal rules, which are
//! generated from the same [`RevealConfig`] the runtime uses so the inline
//! styles and the class rules never disagree.

use std::fmt::Write;

use folio_runtime::RevealConfig;
use folio_runtime::stagger::{StaggerPolicy, css_seconds};
use folio_runtime::style::format_px;

const BASE: &str = "\
*,*::before,*::after{box-sizing:border-box}
html{scroll-behavior:smooth}
body{margin:0;background:#020617;color:#fff;font-family:system-ui,-apple-system,'Segoe UI',sans-serif;overflow-x:hidden}
a{color:inherit;text-decoration:none}
button{font:inherit;color:inherit;background:none;border:0;cursor:pointer}
.page{min-height:100vh;width:100vw;overflow-x:hidden}
.container{width:100%;max-width:1400px;margin:0 auto;padding:0 1rem}
.gradient-text{background-clip:text;-webkit-background-clip:text;color:transparent}
.cursor-follower{position:fixed;width:1.5rem;height:1.5rem;border-radius:9999px;border:2px solid #a855f7;pointer-events:none;z-index:50}
.backdrop{position:fixed;inset:0;overflow:hidden;pointer-events:none}
.backdrop-grid{position:absolute;inset:0;background-image:linear-gradient(to right,#1e293b 1px,transparent 1px),linear-gradient(to bottom,#1e293b 1px,transparent 1px);background-size:4rem 4rem;mask-image:radial-gradient(ellipse 80% 50% at 50% 0%,#000,transparent)}
.parallax-layer{position:absolute;width:500px;height:500px;border-radius:9999px;filter:blur(120px)}
.parallax-layer-0{top:10%;left:10%;background:rgba(168,85,247,.3)}
.parallax-layer-1{top:50%;right:10%;background:rgba(59,130,246,.3)}
.parallax-layer-2{bottom:10%;left:50%;background:rgba(6,182,212,.2)}
.site-nav{position:fixed;top:0;left:0;right:0;z-index:40;backdrop-filter:blur(24px);background:rgba(2,6,23,.8);border-bottom:1px solid rgba(30,41,59,.5)}
.nav-bar{display:flex;align-items:center;justify-content:space-between;padding-top:1rem;padding-bottom:1rem}
.nav-links{display:none;gap:2rem}
.menu-button{padding:.5rem;border-radius:.5rem}
.mobile-menu{overflow:hidden;transition:max-height .3s}
.mobile-menu a{display:block;padding:.5rem 0}
section{position:relative;z-index:10;width:100%;padding:8rem 0}
.hero{min-height:100vh;display:flex;align-items:center;justify-content:center;padding-top:5rem;text-align:center}
.hero-float{display:inline-block;margin-bottom:1.5rem;animation:float 6s ease-in-out infinite}
.badges,.cta,.social{display:flex;gap:.75rem;justify-content:center;flex-wrap:wrap;margin-bottom:2rem}
.badge,.tag{padding:.5rem 1rem;border-radius:9999px;border:1px solid #475569;transition:all .3s}
.card{padding:2rem;border-radius:1rem;border:1px solid #334155;background:linear-gradient(to bottom right,rgba(30,41,59,.5),rgba(15,23,42,.5));position:relative;overflow:hidden;transition:all .5s}
.grid{display:grid;gap:2rem}
.hover-item{transition:transform .3s}
.card:hover .hover-item{transform:translateX(.5rem)}
.swatch{display:inline-block;width:.5rem;height:.5rem;border-radius:9999px;margin-right:.5rem}
.alt-bg{background:rgba(15,23,42,.3)}
footer{position:relative;z-index:10;border-top:1px solid #1e293b;padding:3rem 0}
@media (min-width:768px){.nav-links{display:flex}.menu-button,.mobile-menu{display:none}.grid-2{grid-template-columns:repeat(2,1fr)}.grid-3{grid-template-columns:repeat(3,1fr)}}
@media (max-width:767px){.cursor-follower{display:none}}
";

const KEYFRAMES: &str = "\
@keyframes float{0%,100%{transform:translateY(0px)}50%{transform:translateY(-20px)}}
@keyframes fadeInUp{from{opacity:0;transform:translateY(40px)}to{opacity:1;transform:translateY(0)}}
@keyframes slideInLeft{from{opacity:0;transform:translateX(-100px)}to{opacity:1;transform:translateX(0)}}
@keyframes slideInRight{from{opacity:0;transform:translateX(100px)}to{opacity:1;transform:translateX(0)}}
@keyframes scaleIn{from{opacity:0;transform:scale(0.8)}to{opacity:1;transform:scale(1)}}
@keyframes gradient{0%,100%{background-position:0% 50%}50%{background-position:100% 50%}}
.animate-gradient{background-size:200% auto;animation:gradient 4s ease infinite}
";

/// The complete stylesheet for a given reveal configuration.
#[must_use]
pub fn stylesheet(config: &RevealConfig) -> String {
    let mut css = String::with_capacity(BASE.len() + KEYFRAMES.len() + 1024);
    css.push_str(BASE);
    css.push_str(KEYFRAMES);
    css.push_str(&reveal_rules(config));
    css
}

/// `.scroll-animate` rules and the sibling stagger rules.
#[must_use]
pub fn reveal_rules(config: &RevealConfig) -> String {
    let mut css = String::new();
    let _ = writeln!(
        css,
        ".scroll-animate{{opacity:0;transform:translateY({});transition:all {} {}}}",
        format_px(config.transition.distance_px),
        css_seconds(config.transition_duration()),
        config.easing().css(),
    );
    css.push_str(".scroll-animate.animate-in{opacity:1;transform:translateY(0)}\n");

    // Linear stagger has no bound; its delays only exist as inline styles.
    let policy = config.to_stagger_policy();
    if let StaggerPolicy::Capped { max_steps, .. } = policy {
        for n in 1..=max_steps {
            let _ = writeln!(
                css,
                ".scroll-animate:nth-child({n}){{transition-delay:{}}}",
                css_seconds(policy.delay_for(n))
            );
        }
    }
    css
}
