//! Landing page stylesheet, written to `styles.css` by the static export.
//!
//! Light and dark palettes follow `prefers-color-scheme`.

/// File name the stylesheet is exported under
pub const STYLESHEET_PATH: &str = "styles.css";

pub const LANDING_CSS: &str = r#"
:root {
  --bg-from: #eff6ff;
  --bg-to: #e0e7ff;
  --text: #1f2937;
  --muted: #4b5563;
  --card: #ffffff;
  --card-border: #e5e7eb;
  --primary: #2563eb;
  --primary-hover: #1d4ed8;
  --indigo: #4f46e5;
}

@media (prefers-color-scheme: dark) {
  :root {
    --bg-from: #111827;
    --bg-to: #1f2937;
    --text: #e5e7eb;
    --muted: #9ca3af;
    --card: #1f2937;
    --card-border: #374151;
  }
}

* { box-sizing: border-box; }

body {
  margin: 0;
  font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
  color: var(--text);
}

.landing {
  min-height: 100vh;
  background: linear-gradient(to bottom right, var(--bg-from), var(--bg-to));
}

.container { max-width: 72rem; margin: 0 auto; padding: 3rem 1rem; }

.navbar { display: flex; justify-content: space-between; align-items: center; margin-bottom: 3rem; }
.brand { font-size: 1.5rem; font-weight: 700; margin: 0; }
.nav-actions { display: flex; align-items: center; gap: 1rem; min-height: 2.5rem; }

.btn {
  display: inline-block;
  border: 0;
  cursor: pointer;
  text-decoration: none;
  color: #fff;
  font: inherit;
  transition: all 0.2s;
}
.btn:disabled { cursor: not-allowed; opacity: 0.6; }
.btn-primary { background: var(--primary); font-weight: 500; padding: 0.5rem 1.5rem; border-radius: 0.5rem; }
.btn-primary:hover:not(:disabled) { background: var(--primary-hover); }
.btn-hero {
  background: linear-gradient(to right, var(--primary), var(--indigo));
  font-weight: 700;
  font-size: 1.125rem;
  padding: 1rem 2rem;
  border-radius: 0.75rem;
}
.btn-hero:hover:not(:disabled) { transform: scale(1.05); }
.btn-placeholder { display: inline-block; width: 8rem; height: 2.5rem; }

.hero { text-align: center; padding: 6rem 0; }
.hero-title {
  font-size: 3.75rem;
  font-weight: 700;
  margin: 0 0 1.5rem;
  background: linear-gradient(to right, var(--primary), var(--indigo));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}
.tagline { font-size: 1.25rem; color: var(--muted); max-width: 42rem; margin: 0 auto 3rem; }

.features {
  display: grid;
  gap: 2rem;
  max-width: 56rem;
  margin: 0 auto 3rem;
}
@media (min-width: 768px) { .features { grid-template-columns: repeat(3, 1fr); } }

.feature { position: relative; }
.feature-glow { position: absolute; inset: 0; border-radius: 0.75rem; filter: blur(8px); opacity: 0.25; transition: opacity 0.3s; }
.feature:hover .feature-glow { opacity: 0.4; }
.accent-blue { background: linear-gradient(to right, #2563eb, #0891b2); }
.accent-green { background: linear-gradient(to right, #059669, #16a34a); }
.accent-purple { background: linear-gradient(to right, #9333ea, #db2777); }
.feature-body {
  position: relative;
  background: var(--card);
  padding: 1.5rem;
  border-radius: 0.75rem;
  border: 1px solid var(--card-border);
  box-shadow: 0 10px 15px -3px rgb(0 0 0 / 0.1);
}
.feature-icon { font-size: 1.875rem; margin-bottom: 1rem; }
.feature h3 { font-size: 1.125rem; margin: 0 0 0.5rem; }
.feature p { color: var(--muted); font-size: 0.875rem; margin: 0; }

.pricing {
  background: var(--card);
  opacity: 0.9;
  border-radius: 0.75rem;
  padding: 1.5rem;
  max-width: 24rem;
  margin: 0 auto 2rem;
}
.pricing h3 { font-size: 1.5rem; margin: 0 0 0.5rem; }
.price { font-size: 2.25rem; font-weight: 700; color: var(--primary); margin: 0 0 0.5rem; }
.price span { font-size: 1.125rem; color: var(--muted); }
.pricing ul { list-style: none; text-align: left; color: var(--muted); padding: 0; margin: 0 0 1.5rem; }
.pricing li { margin-bottom: 0.5rem; }

.not-found { text-align: center; }
"#;
