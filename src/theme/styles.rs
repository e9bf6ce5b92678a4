//! Global CSS for the Doppel dashboard.
//!
//! Dark glass over a midnight gradient. Component classes match the names
//! used in `doppel-ui` and the page modules.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BACKGROUND */
  --midnight: #0b0a1a;
  --midnight-raised: #13112a;
  --glass: rgba(30, 27, 60, 0.55);
  --glass-border: rgba(139, 92, 246, 0.18);

  /* ACCENTS */
  --violet: #8b5cf6;
  --violet-glow: rgba(139, 92, 246, 0.35);
  --cyan: #22d3ee;
  --cyan-glow: rgba(34, 211, 238, 0.3);
  --pink: #ec4899;
  --emerald: #34d399;
  --rose: #f43f5e;

  /* TEXT */
  --text-primary: #e2e8f0;
  --text-secondary: rgba(226, 232, 240, 0.75);
  --text-muted: rgba(226, 232, 240, 0.55);

  /* Typography */
  --font-display: 'Space Grotesk', 'Inter', system-ui, sans-serif;
  --font-body: 'Inter', system-ui, sans-serif;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  --radius: 16px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-body);
  background: radial-gradient(circle at 20% 0%, #1e1b4b 0%, var(--midnight) 55%);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

a { color: inherit; text-decoration: none; }

/* === Typography === */
.gradient-text {
  background: linear-gradient(90deg, var(--violet), var(--cyan));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.page-title {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  font-weight: 700;
}

.page-subtitle {
  color: var(--text-muted);
  margin-top: 0.25rem;
}

.muted { color: var(--text-muted); }

/* === Buttons === */
.btn-primary, .btn-hero, .btn-ghost, .btn-outline, .btn-destructive, .icon-btn {
  font-family: var(--font-body);
  font-size: var(--text-sm);
  font-weight: 600;
  border-radius: 12px;
  border: 1px solid transparent;
  padding: 0.6rem 1.2rem;
  cursor: pointer;
  color: var(--text-primary);
  background: transparent;
  transition: all var(--transition-fast);
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
}

.btn-primary { background: linear-gradient(90deg, var(--violet), #6d28d9); }
.btn-primary:hover { box-shadow: 0 0 20px var(--violet-glow); }

.btn-hero {
  background: linear-gradient(90deg, var(--violet), var(--cyan));
  padding: 0.9rem 2rem;
  font-size: var(--text-base);
  box-shadow: 0 0 30px var(--violet-glow);
}
.btn-hero:hover { transform: translateY(-1px); }

.btn-ghost:hover, .icon-btn:hover { background: rgba(139, 92, 246, 0.12); }

.btn-outline { border-color: var(--glass-border); }
.btn-outline:hover { border-color: var(--violet); }

.btn-destructive { background: rgba(244, 63, 94, 0.85); }
.btn-destructive:hover { background: var(--rose); }

button:disabled { opacity: 0.45; cursor: not-allowed; box-shadow: none; }

.icon-btn { padding: 0.5rem; position: relative; }

.badge {
  position: absolute;
  top: -4px;
  right: -4px;
  min-width: 16px;
  height: 16px;
  border-radius: 50%;
  background: var(--violet);
  font-size: 10px;
  display: flex;
  align-items: center;
  justify-content: center;
}

/* === Panels === */
.glass-panel {
  background: var(--glass);
  border: 1px solid var(--glass-border);
  border-radius: var(--radius);
  padding: 1.5rem;
  backdrop-filter: blur(18px);
}

.glass-panel.glow { box-shadow: 0 0 40px var(--violet-glow); }
.glass-panel.danger { border-color: rgba(244, 63, 94, 0.35); background: rgba(244, 63, 94, 0.06); }

.panel-header { margin-bottom: 1rem; }
.panel-title { font-family: var(--font-display); font-size: var(--text-lg); font-weight: 600; }
.panel-subtitle { color: var(--text-muted); font-size: var(--text-sm); }

/* === Metric Cards === */
.metric-card { display: flex; flex-direction: column; gap: 0.5rem; }
.metric-head { display: flex; justify-content: space-between; color: var(--text-muted); font-size: var(--text-sm); }
.metric-value { font-family: var(--font-display); font-size: var(--text-xl); font-weight: 700; }
.metric-foot { display: flex; justify-content: space-between; font-size: var(--text-sm); }
.metric-caption { color: var(--text-secondary); }
.trend-up { color: var(--emerald); }
.trend-down { color: var(--rose); }
.trend-flat { color: var(--text-muted); }

/* === Progress === */
.progress-label { display: flex; justify-content: space-between; font-size: var(--text-sm); margin-bottom: 0.35rem; }
.progress-value { color: var(--text-muted); }
.progress-track { height: 8px; border-radius: 999px; background: rgba(148, 163, 184, 0.15); overflow: hidden; }
.progress-fill {
  height: 100%;
  border-radius: 999px;
  background: linear-gradient(90deg, var(--violet), var(--cyan));
  transition: width var(--transition-normal);
}

/* === Status === */
.status-pill {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
  padding: 0.35rem 0.8rem;
  border-radius: 999px;
  background: rgba(52, 211, 153, 0.1);
}

.status-dot { width: 8px; height: 8px; border-radius: 50%; background: var(--emerald); }
.status-dot.idle { background: var(--text-muted); }
.status-pill .status-dot, .status-dot.live { animation: pulse 2s ease-in-out infinite; }
.status-pill.syncing { background: rgba(34, 211, 238, 0.12); }
.status-pill.syncing .status-dot { background: var(--cyan); }

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.45; }
}

/* === Spinner & Typing === */
.spinner-wrap { display: inline-flex; align-items: center; gap: 0.5rem; }
.spinner {
  width: 14px;
  height: 14px;
  border: 2px solid rgba(226, 232, 240, 0.25);
  border-top-color: var(--cyan);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}
.spin { display: inline-block; animation: spin 1s linear infinite; }

@keyframes spin { to { transform: rotate(360deg); } }

.typing-indicator { display: inline-flex; gap: 4px; padding: 0.75rem 1rem; }
.typing-dot {
  width: 6px;
  height: 6px;
  border-radius: 50%;
  background: var(--cyan);
  animation: bounce 1.2s ease-in-out infinite;
}
.typing-dot:nth-child(2) { animation-delay: 0.15s; }
.typing-dot:nth-child(3) { animation-delay: 0.3s; }

@keyframes bounce {
  0%, 80%, 100% { transform: translateY(0); }
  40% { transform: translateY(-5px); }
}

/* === Inputs === */
.form-field { display: flex; flex-direction: column; gap: 0.35rem; flex: 1; }
.input-label { font-size: var(--text-sm); color: var(--text-muted); }
.input-field {
  width: 100%;
  background: rgba(15, 13, 35, 0.7);
  border: 1px solid var(--glass-border);
  border-radius: 12px;
  padding: 0.7rem 1rem;
  color: var(--text-primary);
  font-family: var(--font-body);
  font-size: var(--text-sm);
}
.input-field:focus { outline: none; border-color: var(--cyan); box-shadow: 0 0 12px var(--cyan-glow); }

.switch {
  width: 42px;
  height: 24px;
  border-radius: 999px;
  border: none;
  background: rgba(148, 163, 184, 0.3);
  position: relative;
  cursor: pointer;
}
.switch::after {
  content: "";
  position: absolute;
  top: 3px;
  left: 3px;
  width: 18px;
  height: 18px;
  border-radius: 50%;
  background: var(--text-primary);
  transition: left var(--transition-fast);
}
.switch.on { background: var(--violet); }
.switch.on::after { left: 21px; }

/* === Tags === */
.tag-cloud { display: flex; flex-wrap: wrap; gap: 0.6rem; align-items: center; justify-content: center; }
.tag-pill {
  border: 1px solid var(--glass-border);
  background: rgba(139, 92, 246, 0.12);
  color: var(--text-primary);
  border-radius: 999px;
  cursor: pointer;
  transition: all var(--transition-fast);
}
.tag-pill:hover { border-color: var(--cyan); }
.tag-slot.selected .tag-pill { border-color: var(--cyan); box-shadow: 0 0 12px var(--cyan-glow); }
.tag-sm { font-size: var(--text-xs); padding: 0.25rem 0.6rem; }
.tag-md { font-size: var(--text-sm); padding: 0.3rem 0.8rem; }
.tag-lg { font-size: var(--text-base); padding: 0.4rem 1rem; }
.tag-xl { font-size: var(--text-lg); padding: 0.5rem 1.2rem; font-weight: 600; }

.chip {
  display: inline-block;
  font-size: var(--text-xs);
  padding: 0.2rem 0.6rem;
  border-radius: 999px;
  background: rgba(34, 211, 238, 0.12);
  color: var(--cyan);
  margin: 0.15rem;
}

/* === Landing & Connect === */
.landing, .connect { min-height: 100vh; display: flex; flex-direction: column; }
.top-nav { display: flex; justify-content: space-between; align-items: center; padding: 1.25rem 2rem; }
.brand { display: flex; align-items: center; gap: 0.6rem; font-family: var(--font-display); font-weight: 700; font-size: var(--text-lg); }
.brand-mark {
  width: 36px;
  height: 36px;
  border-radius: 10px;
  background: linear-gradient(135deg, var(--violet), var(--cyan));
  display: flex;
  align-items: center;
  justify-content: center;
}
.nav-actions { display: flex; gap: 0.75rem; }

.hero { text-align: center; padding: 5rem 2rem 3rem; max-width: 820px; margin: 0 auto; }
.hero h1 { font-family: var(--font-display); font-size: var(--text-3xl); line-height: 1.1; }
.hero p { color: var(--text-secondary); margin: 1.5rem 0 2rem; font-size: var(--text-lg); }

.feature-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1.25rem;
  padding: 2rem;
  max-width: 1100px;
  margin: 0 auto;
}
.feature-icon { font-size: var(--text-xl); color: var(--cyan); }

.footer { text-align: center; color: var(--text-muted); font-size: var(--text-sm); padding: 2rem; margin-top: auto; }

.connect-main { max-width: 900px; margin: 0 auto; padding: 2rem; width: 100%; display: flex; flex-direction: column; gap: 1.5rem; }
.connect-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 1rem; }
.assurances { display: flex; gap: 1.5rem; color: var(--text-muted); font-size: var(--text-sm); margin-top: 0.75rem; }

.oauth-card {
  position: relative;
  display: flex;
  justify-content: space-between;
  align-items: center;
  gap: 1rem;
  padding: 1.5rem;
  border-radius: var(--radius);
  border: 1px solid var(--glass-border);
  background: var(--glass);
}
.oauth-card.brand-google { border-color: rgba(239, 68, 68, 0.3); }
.oauth-card.brand-spotify { border-color: rgba(34, 197, 94, 0.3); }
.oauth-card.brand-youtube { border-color: rgba(220, 38, 38, 0.3); }
.oauth-card.brand-instagram { border-color: rgba(168, 85, 247, 0.3); }
.oauth-identity { display: flex; align-items: center; gap: 1rem; }
.oauth-icon { font-size: var(--text-xl); width: 48px; height: 48px; border-radius: 12px; background: rgba(15, 13, 35, 0.6); display: flex; align-items: center; justify-content: center; }
.oauth-status { font-size: var(--text-sm); color: var(--text-muted); }
.oauth-status.connected { color: var(--emerald); }
.oauth-card .status-dot { position: absolute; top: 12px; right: 12px; }

/* === Dashboard Shell === */
.dashboard { display: flex; min-height: 100vh; }
.dashboard-main { flex: 1; display: flex; flex-direction: column; min-width: 0; }
.dashboard-content { flex: 1; overflow: auto; padding: 1.5rem; display: flex; flex-direction: column; gap: 1.5rem; }

.sidebar {
  width: 260px;
  background: rgba(13, 11, 30, 0.85);
  border-right: 1px solid var(--glass-border);
  display: flex;
  flex-direction: column;
  padding: 1rem;
  gap: 1rem;
  transition: width var(--transition-normal);
}
.sidebar.collapsed { width: 76px; }
.sidebar-head { display: flex; justify-content: space-between; align-items: center; }
.sidebar-nav { display: flex; flex-direction: column; gap: 0.35rem; flex: 1; }
.sidebar-link {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.7rem 0.8rem;
  border-radius: 12px;
  color: var(--text-secondary);
  border: 1px solid transparent;
}
.sidebar-link:hover { background: rgba(139, 92, 246, 0.1); }
.sidebar-link.active { color: var(--violet); border-color: rgba(139, 92, 246, 0.3); background: rgba(139, 92, 246, 0.12); }
.sidebar-icon { width: 20px; text-align: center; }
.sidebar-foot { padding: 0.75rem; border-radius: 12px; background: rgba(139, 92, 246, 0.08); }

.navbar {
  height: 64px;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  border-bottom: 1px solid var(--glass-border);
  background: rgba(11, 10, 26, 0.5);
  backdrop-filter: blur(18px);
}
.navbar-left, .navbar-right { display: flex; align-items: center; gap: 1rem; }
.connected-pill { display: flex; align-items: center; gap: 0.5rem; padding: 0.3rem 0.8rem; border-radius: 999px; background: rgba(148, 163, 184, 0.1); font-size: var(--text-sm); color: var(--text-muted); }
.twin-identity { text-align: right; padding-left: 1rem; border-left: 1px solid var(--glass-border); }
.twin-identity small { display: block; color: var(--text-muted); font-size: var(--text-xs); }

/* === Grids === */
.grid-4 { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1rem; }
.grid-2 { display: grid; grid-template-columns: repeat(auto-fit, minmax(340px, 1fr)); gap: 1rem; }
.grid-main-side { display: grid; grid-template-columns: minmax(0, 2fr) minmax(260px, 1fr); gap: 1rem; }

/* === Charts === */
.chart { width: 100%; height: auto; }
.chart text { fill: var(--text-muted); font-size: 11px; }
.chart-legend { display: flex; gap: 1rem; font-size: var(--text-sm); color: var(--text-muted); margin-top: 0.5rem; }
.legend-swatch { display: inline-block; width: 10px; height: 10px; border-radius: 3px; margin-right: 0.35rem; }

.heatmap { display: grid; grid-template-columns: 60px repeat(3, 1fr); gap: 4px; font-size: var(--text-xs); }
.heatmap-cell { border-radius: 6px; padding: 0.5rem; text-align: center; color: var(--text-primary); }
.heatmap-head { color: var(--text-muted); text-align: center; }

.timeline { display: flex; flex-direction: column; gap: 0.75rem; }
.timeline-item { display: flex; gap: 1rem; align-items: center; padding: 0.75rem; border-radius: 12px; background: rgba(15, 13, 35, 0.5); }
.timeline-time { color: var(--text-muted); font-size: var(--text-xs); width: 70px; }
.timeline-icon { width: 32px; height: 32px; border-radius: 10px; background: rgba(139, 92, 246, 0.15); display: flex; align-items: center; justify-content: center; }

.social-canvas { width: 100%; height: auto; }
.social-edge { stroke: var(--violet); }
.social-node { cursor: pointer; }
.social-node text { fill: var(--text-primary); font-size: 11px; }
.social-node.selected circle { stroke: var(--text-primary); stroke-width: 3px; }
.node-self { fill: var(--violet); }
.node-friend { fill: var(--cyan); }
.node-platform { fill: var(--pink); }
.node-channel { fill: #f59e0b; }
.node-artist { fill: var(--emerald); }

/* === Chat === */
.chat-layout { display: grid; grid-template-columns: minmax(0, 2fr) minmax(240px, 1fr); gap: 1rem; height: calc(100vh - 112px); }
.chat-panel { display: flex; flex-direction: column; padding: 0; overflow: hidden; }
.chat-header { padding: 1rem 1.5rem; border-bottom: 1px solid var(--glass-border); display: flex; align-items: center; gap: 0.75rem; }
.chat-messages { flex: 1; overflow-y: auto; padding: 1.5rem; display: flex; flex-direction: column; gap: 1rem; }
.chat-input { display: flex; gap: 0.75rem; padding: 1rem 1.5rem; border-top: 1px solid var(--glass-border); align-items: center; }
.chat-sidebar { display: flex; flex-direction: column; gap: 1rem; overflow-y: auto; }

.bubble-row { display: flex; gap: 0.6rem; align-items: flex-end; }
.bubble-row.user { flex-direction: row-reverse; }
.bubble-avatar { width: 32px; height: 32px; border-radius: 10px; background: linear-gradient(135deg, var(--violet), var(--cyan)); display: flex; align-items: center; justify-content: center; font-size: var(--text-xs); }
.bubble { max-width: 70%; padding: 0.75rem 1rem; border-radius: 16px; font-size: var(--text-sm); }
.bubble.ai { background: rgba(139, 92, 246, 0.15); border: 1px solid var(--glass-border); border-bottom-left-radius: 4px; }
.bubble.user { background: linear-gradient(90deg, var(--violet), #6d28d9); border-bottom-right-radius: 4px; }
.bubble-time { display: block; font-size: var(--text-xs); color: var(--text-muted); margin-top: 0.25rem; }

/* === Settings === */
.settings { max-width: 760px; margin: 0 auto; width: 100%; display: flex; flex-direction: column; gap: 1.5rem; }
.setting-row { display: flex; justify-content: space-between; align-items: center; padding: 1rem; border-radius: 12px; background: rgba(15, 13, 35, 0.45); margin-bottom: 0.75rem; }
.setting-row.danger { background: rgba(244, 63, 94, 0.08); border: 1px solid rgba(244, 63, 94, 0.3); }
.setting-row p { font-size: var(--text-sm); color: var(--text-muted); }
.profile-card { display: flex; align-items: center; gap: 1.5rem; }
.profile-avatar { width: 80px; height: 80px; border-radius: 20px; background: linear-gradient(135deg, var(--violet), var(--cyan)); display: flex; align-items: center; justify-content: center; font-size: var(--text-2xl); }

/* === Notices === */
.notice-host { position: fixed; bottom: 1.5rem; right: 1.5rem; display: flex; flex-direction: column; gap: 0.75rem; z-index: 50; }
.notice {
  min-width: 300px;
  max-width: 380px;
  padding: 1rem 1.25rem;
  border-radius: 14px;
  background: var(--midnight-raised);
  border: 1px solid var(--glass-border);
  box-shadow: 0 12px 40px rgba(0, 0, 0, 0.4);
  display: flex;
  justify-content: space-between;
  gap: 1rem;
}
.notice-title { font-weight: 600; font-size: var(--text-sm); }
.notice-description { color: var(--text-muted); font-size: var(--text-sm); }
.notice-destructive { background: rgba(159, 18, 57, 0.95); border-color: var(--rose); }

/* === Not Found === */
.not-found { min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem; text-align: center; }
.not-found h1 { font-family: var(--font-display); font-size: 4rem; }
"#;
