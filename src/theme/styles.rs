//! Global CSS styles for Sanctuary.
//!
//! Warm candlelit palette over a dark base. Behavior writes only classes
//! (`show`, `showcase`, `flipped`, `active`, `open`) and inline
//! transform/opacity/z-index/max-height/background; everything else lives here.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Base (matches the gradient's scroll-top color) */
  --night: rgb(18, 18, 18);
  --night-raised: #1d1a18;
  --night-border: #2e2824;

  /* Warm accents (gradient anchors) */
  --ember: rgb(74, 46, 29);
  --sand: rgb(149, 122, 105);
  --candle: #e8c89a;

  /* Text */
  --text-primary: #f4ede6;
  --text-secondary: rgba(244, 237, 230, 0.72);
  --text-muted: rgba(244, 237, 230, 0.5);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Layout */
  --nav-height: 72px;
  --card-width: 260px;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-card: 450ms cubic-bezier(0.2, 0.8, 0.2, 1);
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
  font-family: var(--font-sans);
  background: var(--night);
  color: var(--text-primary);
  line-height: 1.7;
}

.page {
  min-height: 100vh;
  background: var(--night);
  padding-top: var(--nav-height);
}

.section-header {
  font-family: var(--font-serif);
  font-weight: 400;
  font-size: 2rem;
  color: var(--candle);
  text-align: center;
  margin-bottom: 2rem;
}

/* === Navigation === */
.site-nav {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--nav-height);
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 2rem;
  background: rgba(18, 18, 18, 0.85);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--night-border);
}

.nav-title {
  font-family: var(--font-serif);
  font-size: 1.5rem;
  color: var(--candle);
  letter-spacing: 0.05em;
}

.nav-links {
  display: flex;
  gap: 2rem;
  list-style: none;
}

.nav-links a {
  color: var(--text-secondary);
  text-decoration: none;
  transition: color var(--transition-fast);
}

.nav-links a:hover {
  color: var(--candle);
}

.menu-toggle {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  cursor: pointer;
  padding: 0.5rem;
}

.menu-bar {
  display: block;
  width: 24px;
  height: 2px;
  background: var(--text-primary);
}

/* === Hero === */
.hero {
  text-align: center;
  padding: 6rem 1rem 4rem;
}

.hero-title {
  font-family: var(--font-serif);
  font-weight: 300;
  font-size: 4rem;
  letter-spacing: 0.08em;
}

.hero-tagline {
  color: var(--text-secondary);
  font-style: italic;
  margin-top: 1rem;
}

/* === Carousel === */
.music {
  padding: 4rem 0;
}

.carousel {
  position: relative;
  display: flex;
  align-items: center;
}

.music-scroll {
  display: flex;
  gap: 2rem;
  overflow-x: auto;
  scroll-behavior: smooth;
  scrollbar-width: none;
  perspective: 1200px;
  padding: 3rem calc(50% - var(--card-width) / 2);
  flex: 1;
}

.music-scroll::-webkit-scrollbar {
  display: none;
}

.release-card {
  flex: 0 0 var(--card-width);
  height: 340px;
  cursor: pointer;
  transform-style: preserve-3d;
  transition: transform var(--transition-card), opacity var(--transition-card);
}

.album-inner {
  position: relative;
  width: 100%;
  height: 100%;
  transform-style: preserve-3d;
  transition: transform var(--transition-card);
}

.album-front, .album-back {
  position: absolute;
  inset: 0;
  backface-visibility: hidden;
  border-radius: 6px;
  overflow: hidden;
  border: 1px solid var(--night-border);
  box-shadow: 0 20px 40px rgba(0, 0, 0, 0.45);
}

.album-front {
  background: var(--night-raised);
}

.album-cover {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.album-placeholder {
  display: flex;
  align-items: center;
  justify-content: center;
  height: 100%;
  font-family: var(--font-serif);
  font-size: 1.75rem;
  color: var(--candle);
  background: linear-gradient(160deg, var(--ember), var(--night));
}

.album-back {
  transform: rotateY(180deg);
  background: linear-gradient(160deg, var(--night-raised), var(--ember));
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.album-title {
  font-family: var(--font-serif);
  font-size: 1.5rem;
  font-weight: 400;
}

.album-year {
  color: var(--text-muted);
  font-size: 0.875rem;
}

.album-notes {
  color: var(--text-secondary);
  font-size: 0.95rem;
}

.album-devotion-hint {
  margin-top: auto;
  color: var(--candle);
  font-size: 0.8rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
}

.release-card.showcase .album-front,
.release-card.showcase .album-back {
  box-shadow: 0 24px 60px rgba(232, 200, 154, 0.2);
}

.carousel-btn {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  z-index: 20;
  width: 44px;
  height: 44px;
  border-radius: 50%;
  border: 1px solid var(--night-border);
  background: rgba(18, 18, 18, 0.7);
  color: var(--text-primary);
  font-size: 1.75rem;
  line-height: 1;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.carousel-btn:hover {
  background: var(--ember);
}

.carousel-btn.left { left: 1rem; }
.carousel-btn.right { right: 1rem; }

/* === Devotions === */
.devotions {
  max-width: 760px;
  margin: 0 auto;
  padding: 4rem 1.5rem 6rem;
  transition: opacity var(--transition-normal);
}

.devotions.active .devotion:not(.open) {
  opacity: 0.6;
}

.devotion {
  border-bottom: 1px solid var(--night-border);
  cursor: pointer;
  transition: opacity var(--transition-normal);
}

.devotion-header {
  display: grid;
  grid-template-columns: 1fr auto;
  padding: 1.25rem 0;
}

.devotion-title {
  font-family: var(--font-serif);
  font-weight: 400;
  font-size: 1.5rem;
}

.devotion-verse {
  grid-column: 1;
  color: var(--text-muted);
  font-size: 0.875rem;
}

.devotion-chevron {
  grid-column: 2;
  grid-row: 1 / span 2;
  align-self: center;
  color: var(--candle);
  font-size: 1.5rem;
}

.devotion-body {
  max-height: 0;
  overflow: hidden;
  transition: max-height 500ms ease;
}

.devotion-body p {
  color: var(--text-secondary);
  padding-bottom: 1rem;
}

.devotion.active .devotion-title {
  color: var(--candle);
}

/* === Footer === */
.site-footer {
  text-align: center;
  padding: 3rem 1rem;
  color: var(--text-muted);
  font-size: 0.875rem;
}

/* === Responsive === */
@media (max-width: 768px) {
  .menu-toggle {
    display: flex;
  }

  .nav-links {
    display: none;
    position: absolute;
    top: var(--nav-height);
    left: 0;
    right: 0;
    flex-direction: column;
    gap: 0;
    background: var(--night-raised);
    border-bottom: 1px solid var(--night-border);
  }

  .nav-links.show {
    display: flex;
  }

  .nav-links li {
    padding: 1rem 2rem;
  }

  .hero-title {
    font-size: 2.75rem;
  }

  :root {
    --card-width: 200px;
  }
}

@media (prefers-reduced-motion: reduce) {
  .release-card, .album-inner, .devotion-body {
    transition: none;
  }
}
"#;
