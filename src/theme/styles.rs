//! Global CSS styles for Mission Board.
//!
//! Deep-space palette: near-black background, nebula violet accents and
//! status colors for mission badges.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SPACE (Backgrounds) */
  --space-black: #05060f;
  --space-deep: #0b0e23;
  --space-border: #1c2145;

  /* NEBULA (Accents) */
  --nebula: #7b5cff;
  --nebula-glow: rgba(123, 92, 255, 0.35);
  --aurora: #3fd8c8;

  /* STATUS */
  --status-active: #3fd87a;
  --status-completed: #5f8fff;
  --status-planned: #ffb547;

  /* TEXT */
  --text-primary: #f2f4ff;
  --text-secondary: rgba(242, 244, 255, 0.7);
  --text-muted: rgba(242, 244, 255, 0.45);

  /* SEMANTIC */
  --danger: #ff4d6d;

  /* Layout */
  --header-height: 4rem;

  /* Typography */
  --font-display: 'Orbitron', 'Segoe UI', sans-serif;
  --font-body: 'Inter', 'Segoe UI', sans-serif;
}

* { box-sizing: border-box; }

html, body {
  margin: 0;
  height: 100%;
  background: var(--space-black);
  color: var(--text-primary);
  font-family: var(--font-body);
  overflow: hidden;
}

/* === Page (scroll container) === */
.page {
  position: relative;
  height: 100vh;
  overflow-y: auto;
  overflow-x: hidden;
  scroll-behavior: smooth;
}

/* === Progress Bar === */
.scroll-progress {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: 3px;
  z-index: 200;
  background: transparent;
}

.scroll-progress-fill {
  height: 100%;
  width: 0;
  background: linear-gradient(90deg, var(--nebula), var(--aurora));
  box-shadow: 0 0 8px var(--nebula-glow);
}

/* === Header === */
.site-header {
  position: sticky;
  top: 0;
  z-index: 100;
  height: var(--header-height);
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
  background: rgba(5, 6, 15, 0.85);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--space-border);
}

.site-logo {
  font-family: var(--font-display);
  letter-spacing: 0.1em;
  text-transform: uppercase;
}

.site-nav { display: flex; gap: 1rem; }

.nav-link {
  background: none;
  border: none;
  color: var(--text-secondary);
  cursor: pointer;
  font: inherit;
}

.nav-link:hover { color: var(--aurora); }

/* === Hero === */
.hero {
  position: relative;
  min-height: 90vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  overflow: hidden;
}

.hero-title {
  position: relative;
  z-index: 2;
  font-family: var(--font-display);
  font-size: clamp(2rem, 5vw, 4rem);
  margin: 0;
}

.hero-subtitle {
  position: relative;
  z-index: 2;
  color: var(--text-secondary);
}

/* === Stars === */
.stars {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.star {
  position: absolute;
  border-radius: 50%;
  background: #fff;
  opacity: 0.2;
  animation-name: twinkle;
  animation-iteration-count: infinite;
  animation-direction: alternate;
  animation-timing-function: ease-in-out;
}

@keyframes twinkle {
  from { opacity: 0.2; }
  to { opacity: 1; }
}

/* === Planets === */
.planet-layer {
  position: absolute;
  inset: 0;
  pointer-events: none;
  z-index: 1;
}

.planet {
  position: absolute;
  border-radius: 50%;
  will-change: transform;
}

.planet-1 {
  width: 180px;
  height: 180px;
  top: 15%;
  left: 8%;
  background: radial-gradient(circle at 30% 30%, #ff9a6b, #8a2f1c);
}

.planet-2 {
  width: 110px;
  height: 110px;
  top: 60%;
  right: 12%;
  background: radial-gradient(circle at 30% 30%, #8fd3ff, #1d4d8a);
}

.planet-3 {
  width: 70px;
  height: 70px;
  top: 25%;
  right: 30%;
  background: radial-gradient(circle at 30% 30%, #e1c9ff, #5a3d9a);
}

/* === Sections === */
.section {
  max-width: 960px;
  margin: 0 auto;
  padding: 4rem 2rem;
  scroll-margin-top: var(--header-height);
}

.section-title {
  font-family: var(--font-display);
  color: var(--aurora);
}

.reveal {
  opacity: 0;
  transform: translateY(40px);
  transition: opacity 0.8s ease, transform 0.8s ease;
}

.reveal.visible {
  opacity: 1;
  transform: none;
}

/* === Form === */
.mission-form {
  display: grid;
  gap: 1rem;
}

.form-group {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.form-input {
  padding: 0.6rem 0.8rem;
  border-radius: 6px;
  border: 1px solid var(--space-border);
  background: var(--space-deep);
  color: var(--text-primary);
  font: inherit;
}

.form-input:focus {
  outline: none;
  border-color: var(--nebula);
  box-shadow: 0 0 0 3px var(--nebula-glow);
}

.error-message {
  color: var(--danger);
  font-size: 0.85rem;
}

.form-failure { color: var(--danger); }

.btn-primary,
.btn-ghost,
.btn-edit,
.btn-delete {
  padding: 0.55rem 1.1rem;
  border-radius: 6px;
  cursor: pointer;
  font: inherit;
}

.btn-primary {
  border: 1px solid var(--nebula);
  background: var(--nebula);
  color: #fff;
}

.btn-primary:hover { box-shadow: 0 0 12px var(--nebula-glow); }

.btn-ghost,
.btn-edit {
  border: 1px solid var(--space-border);
  background: transparent;
  color: var(--text-secondary);
}

.btn-delete {
  border: 1px solid var(--danger);
  background: transparent;
  color: var(--danger);
}

/* === Missions List === */
.missions-list {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1.25rem;
}

.no-missions {
  color: var(--text-muted);
  font-style: italic;
}

.mission-card {
  padding: 1.25rem;
  border-radius: 10px;
  border: 1px solid var(--space-border);
  background: var(--space-deep);
}

.mission-card h3 { margin-top: 0; }

.mission-status {
  display: inline-block;
  padding: 0.2rem 0.6rem;
  border-radius: 999px;
  font-size: 0.8rem;
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

.status-active { color: var(--status-active); border: 1px solid var(--status-active); }
.status-completed { color: var(--status-completed); border: 1px solid var(--status-completed); }
.status-planned { color: var(--status-planned); border: 1px solid var(--status-planned); }

.mission-actions {
  display: flex;
  gap: 0.5rem;
  margin-top: 1rem;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 300;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.7);
}

.modal {
  width: min(520px, 92vw);
  padding: 1.5rem;
  border-radius: 12px;
  border: 1px solid var(--space-border);
  background: var(--space-deep);
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.modal-title { margin: 0; }

.modal-close {
  background: none;
  border: none;
  color: var(--text-secondary);
  font-size: 1.5rem;
  cursor: pointer;
}

.modal-actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.75rem;
}

/* === Footer === */
.site-footer {
  position: relative;
  padding: 4rem 2rem;
  text-align: center;
  color: var(--text-muted);
  overflow: hidden;
}

@media (max-width: 768px) {
  .planet-1 { width: 110px; height: 110px; }
  .planet-2 { width: 70px; height: 70px; }
  .site-header { padding: 0.75rem 1rem; }
}
"#;
