pub const GLOBAL_CSS: &str = r#"
:root {
    --bg: #0b0d0c;
    --surface: #121513;
    --border: rgba(255, 255, 255, 0.08);
    --white: #f4f1ea;
    --muted: rgba(244, 241, 234, 0.62);
    --dim: rgba(244, 241, 234, 0.18);
    --gold: #c9a45c;
    --green: #5fd68a;
    --green-dim: #3c9a5f;
    --font-display: 'Cormorant Garamond', Georgia, serif;
    --font-body: 'Inter', system-ui, sans-serif;
    --font-mono: 'JetBrains Mono', ui-monospace, monospace;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

html { scroll-behavior: smooth; }

body {
    background: var(--bg);
    color: var(--white);
    font-family: var(--font-body);
    line-height: 1.6;
    overflow-x: hidden;
}

.font-display { font-family: var(--font-display); }
.font-body { font-family: var(--font-body); }
.font-mono { font-family: var(--font-mono); letter-spacing: 0.02em; }
.italic { font-style: italic; }
.text-white { color: var(--white); }
.text-muted { color: var(--muted); }
.text-dim { color: var(--dim); }
.text-gold { color: var(--gold); }
.text-green { color: var(--green); }
.text-green-dim { color: var(--green-dim); }
.bg-surface { background: var(--surface); }
.bg-green { background: var(--green); }
.w-full { width: 100%; }
.center-layout { text-align: center; display: flex; flex-direction: column; align-items: center; }

/* nav */
.nav-container {
    position: fixed;
    top: 1.25rem;
    left: 0;
    right: 0;
    display: flex;
    justify-content: center;
    z-index: 50;
    padding: 0 1rem;
    transition: top 0.3s ease;
}
.nav-container.scrolled { top: 0.5rem; }
.nav-island {
    width: 100%;
    max-width: 1100px;
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 0.6rem 0.75rem 0.6rem 1.25rem;
    border: 1px solid var(--border);
    border-radius: 999px;
    background: rgba(18, 21, 19, 0.72);
    backdrop-filter: blur(14px);
}
.nav-container.scrolled .nav-island { box-shadow: 0 12px 40px rgba(0, 0, 0, 0.45); }
.nav-left { display: flex; align-items: center; gap: 0.75rem; }
.nav-logo-img { width: 28px; height: 28px; }
.nav-brand { font-size: 1.3rem; }
.nav-pill-tag {
    font-size: 0.7rem;
    text-transform: uppercase;
    padding: 0.2rem 0.6rem;
    border: 1px solid rgba(95, 214, 138, 0.3);
    border-radius: 999px;
}
.btn-nav {
    font-family: var(--font-mono);
    font-size: 0.8rem;
    padding: 0.55rem 1.1rem;
    border-radius: 999px;
    border: 1px solid var(--gold);
    background: transparent;
    color: var(--gold);
    cursor: pointer;
    transition: background 0.2s ease, color 0.2s ease;
}
.btn-nav:hover { background: var(--gold); color: var(--bg); }

/* shared section layout */
section { position: relative; padding: 7rem 1.5rem; }
section > * { max-width: 1100px; margin-left: auto; margin-right: auto; }
.section-label {
    font-family: var(--font-mono);
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.18em;
    color: var(--green);
    margin-bottom: 1.25rem;
}
.section-headline {
    font-family: var(--font-display);
    font-size: clamp(2rem, 4vw, 3.2rem);
    font-weight: 500;
    line-height: 1.15;
    margin-bottom: 1.5rem;
}
.section-body { max-width: 680px; margin-left: 0; font-size: 1.05rem; margin-bottom: 3rem; }
.grid-container { display: grid; gap: 1px; background: var(--border); border: 1px solid var(--border); }
.grid-item { background: var(--bg); padding: 2rem; }
.bg-surface .grid-item { background: var(--surface); }

.reveal {
    opacity: 0;
    transform: translateY(24px);
    transition: opacity 0.8s ease, transform 0.8s ease;
}
.reveal.visible { opacity: 1; transform: translateY(0); }

.glow-green {
    position: absolute;
    border-radius: 50%;
    background: radial-gradient(circle, rgba(95, 214, 138, 0.16) 0%, rgba(95, 214, 138, 0) 70%);
    pointer-events: none;
}

/* hero */
.hero-section { min-height: 100vh; display: flex; align-items: center; padding-top: 9rem; overflow: hidden; }
.hero-glow { width: 900px; height: 900px; top: -300px; right: -300px; }
.hero-content { position: relative; max-width: 900px; }
.eyebrow-pill {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    font-family: var(--font-mono);
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.12em;
    padding: 0.35rem 0.9rem;
    border: 1px solid var(--border);
    border-radius: 999px;
    margin-bottom: 2rem;
}
.eyebrow-pill .dot { width: 6px; height: 6px; border-radius: 50%; background: var(--green); }
.hero-headline { font-family: var(--font-display); font-size: clamp(2.8rem, 7vw, 5.5rem); font-weight: 500; line-height: 1.05; margin-bottom: 2rem; }
.hero-headline .line-two { color: var(--gold); }
.hero-subheadline { font-size: 1.2rem; color: var(--muted); max-width: 640px; margin-bottom: 2.5rem; }
.hero-cta { display: flex; flex-direction: column; align-items: flex-start; gap: 1rem; }
.hero-meta { font-size: 0.8rem; }

.btn-primary {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.9rem;
    font-family: var(--font-body);
    font-size: 1rem;
    font-weight: 600;
    padding: 0.9rem 0.9rem 0.9rem 1.6rem;
    border-radius: 999px;
    border: none;
    background: var(--green);
    color: var(--bg);
    cursor: pointer;
    transition: transform 0.2s ease, box-shadow 0.2s ease;
}
.btn-primary:hover { transform: translateY(-2px); box-shadow: 0 12px 30px rgba(95, 214, 138, 0.25); }
.btn-primary:disabled { opacity: 0.6; cursor: not-allowed; transform: none; box-shadow: none; }
.btn-gold { background: var(--gold); padding: 1rem 1.6rem; }
.icon-circle {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 32px;
    height: 32px;
    border-radius: 50%;
    background: rgba(11, 13, 12, 0.15);
}

.context-bridge { padding: 3rem 1.5rem; border-top: 1px solid var(--border); border-bottom: 1px solid var(--border); }
.bridge-text { max-width: 820px; margin: 0 auto; font-size: 1.35rem; text-align: center; }

/* problem */
.problem-grid { grid-template-columns: repeat(4, 1fr); }
.problem-card { position: relative; }
.card-top-accent { position: absolute; top: 0; left: 0; width: 40px; height: 2px; background: var(--gold); }
.problem-num { font-size: 3rem; line-height: 1; margin-bottom: 1.5rem; }
.problem-title { font-size: 1.1rem; margin-bottom: 0.75rem; }
.problem-desc { font-size: 0.95rem; margin-bottom: 1.5rem; }
.problem-impact { font-size: 0.72rem; text-transform: uppercase; }

/* value */
.value-grid { grid-template-columns: repeat(3, 1fr); }
.value-num { font-size: 3.2rem; line-height: 1; margin-bottom: 1.25rem; }
.value-title { font-size: 1.1rem; margin-bottom: 0.75rem; }
.value-desc { font-size: 0.95rem; }

/* process */
.process-list { grid-template-columns: 1fr; }
.process-row { display: grid; grid-template-columns: 120px 1fr 140px; gap: 2rem; align-items: start; }
.process-step { font-size: 0.8rem; text-transform: uppercase; padding-top: 0.2rem; }
.process-content h3 { font-size: 1.15rem; margin-bottom: 0.4rem; }
.process-day { font-size: 0.8rem; text-align: right; padding-top: 0.2rem; }

/* deliverables */
.deliverables-grid { grid-template-columns: repeat(3, 1fr); }
.del-num { font-size: 0.8rem; margin-bottom: 1.25rem; }
.deliverable-title { font-size: 1.1rem; margin-bottom: 0.6rem; }
.deliverable-desc { font-size: 0.95rem; }

/* mid cta */
.mid-cta-section { display: flex; align-items: center; justify-content: space-between; gap: 3rem; }
.mid-cta-section > * { margin: 0; }
.mid-cta-left { max-width: 640px; }
.mid-cta-headline { font-size: clamp(1.8rem, 3vw, 2.6rem); font-weight: 500; line-height: 1.2; margin-bottom: 1rem; }

/* pricing */
.pricing-container {
    max-width: 760px;
    padding: 3.5rem;
    border: 1px solid var(--border);
    border-radius: 20px;
    display: flex;
    flex-direction: column;
    align-items: center;
    text-align: center;
}
.price-display { display: flex; align-items: flex-start; gap: 0.25rem; }
.price-currency { font-size: 2.5rem; margin-top: 0.75rem; }
.price-amount { font-size: 6rem; line-height: 1; }
.price-label { font-size: 0.8rem; text-transform: uppercase; margin: 1rem 0 2.5rem; }
.price-stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; width: 100%; margin-bottom: 2.5rem; }
.stat-block { display: flex; flex-direction: column; gap: 0.4rem; }
.stat-val { font-size: 1.8rem; }
.stat-lbl { font-size: 0.7rem; text-transform: uppercase; }
.price-includes { width: 100%; margin-bottom: 2rem; }
.includes-list { list-style: none; display: grid; grid-template-columns: repeat(2, 1fr); gap: 0.75rem 2rem; text-align: left; }
.includes-list li::before { content: '✓'; color: var(--green); margin-right: 0.6rem; }
.price-notice { font-size: 0.75rem; line-height: 1.7; padding: 1.25rem; border-radius: 12px; text-align: left; margin-bottom: 2.5rem; }

/* qualification */
.qual-list { grid-template-columns: 1fr; margin-bottom: 2rem; }
.qual-row { display: flex; align-items: center; gap: 1rem; padding: 1.25rem 2rem; }
.qual-dot { width: 8px; height: 8px; border-radius: 50%; flex-shrink: 0; }
.qual-not-for { font-size: 0.8rem; line-height: 1.7; border-left: 2px solid var(--gold); padding-left: 1.25rem; }

/* final cta */
.final-cta-section { overflow: hidden; padding: 9rem 1.5rem; }
.final-glow { width: 800px; height: 800px; top: -200px; left: 50%; transform: translateX(-50%); }
.final-body { max-width: 620px; font-size: 1.1rem; margin-bottom: 2.5rem; }
.final-btn-wrapper { display: flex; flex-direction: column; align-items: center; gap: 1rem; }

/* footer */
.site-footer {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 2.5rem 1.5rem;
    max-width: 1100px;
    margin: 0 auto;
    border-top: 1px solid var(--border);
}
.footer-left { letter-spacing: 0.2em; }
.footer-right { display: flex; gap: 1.5rem; font-size: 0.8rem; }
.footer-right a { color: inherit; text-decoration: none; }
.footer-right a:hover { color: var(--white); }

/* modal */
.modal-overlay {
    position: fixed;
    inset: 0;
    z-index: 100;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1.5rem;
    background: rgba(0, 0, 0, 0.72);
    backdrop-filter: blur(6px);
    animation: overlayIn 0.25s ease;
}
@keyframes overlayIn { from { opacity: 0; } to { opacity: 1; } }
.modal-box {
    width: 100%;
    max-width: 640px;
    max-height: 90vh;
    overflow-y: auto;
    border: 1px solid var(--border);
    border-radius: 20px;
    padding: 2.25rem;
}
.modal-header { margin-bottom: 1.75rem; }
.modal-header-top { display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.75rem; }
.modal-close { background: none; border: none; color: var(--muted); font-size: 1.75rem; line-height: 1; cursor: pointer; }
.modal-close:hover { color: var(--white); }
.modal-title { font-size: 2rem; font-weight: 500; }
.form-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.input-group { display: flex; flex-direction: column; gap: 0.4rem; margin-bottom: 1.1rem; }
.form-label { font-size: 0.7rem; text-transform: uppercase; letter-spacing: 0.1em; }
.input-group input,
.input-group select {
    width: 100%;
    padding: 0.75rem 0.9rem;
    border: 1px solid var(--border);
    border-radius: 10px;
    background: var(--bg);
    color: var(--white);
    font-family: var(--font-body);
    font-size: 0.95rem;
}
.input-group input:focus,
.input-group select:focus { outline: none; border-color: var(--green); }
.form-divider { height: 1px; background: var(--border); margin: 0.75rem 0 1.5rem; }
.payment-notice { font-size: 0.72rem; line-height: 1.7; padding: 1rem; border: 1px solid var(--border); border-radius: 10px; margin-bottom: 1.5rem; }
.error-message { color: #ff6b6b; font-size: 13px; margin-bottom: 16px; text-align: center; }
.modal-success { padding: 2rem 0; }
.success-icon { font-size: 3.5rem; margin-bottom: 1rem; }
.success-title { font-size: 28px; margin-bottom: 8px; }
.success-body { margin-bottom: 24px; }

/* not found */
.not-found { min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1.5rem; }
.not-found a { color: var(--gold); }

@media (max-width: 900px) {
    .problem-grid,
    .value-grid,
    .deliverables-grid { grid-template-columns: 1fr 1fr; }
    .mid-cta-section { flex-direction: column; align-items: flex-start; }
    .process-row { grid-template-columns: 1fr; gap: 0.5rem; }
    .process-day { text-align: left; }
}

@media (max-width: 600px) {
    section { padding: 5rem 1.25rem; }
    .nav-pill-tag { display: none; }
    .problem-grid,
    .value-grid,
    .deliverables-grid,
    .form-grid,
    .includes-list,
    .price-stats { grid-template-columns: 1fr; }
    .pricing-container { padding: 2rem 1.25rem; }
    .price-amount { font-size: 4.5rem; }
    .modal-box { padding: 1.5rem; }
    .site-footer { flex-direction: column; gap: 1rem; }
}
"#;
