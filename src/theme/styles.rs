//! Global CSS styles for the birthday greeting.
//!
//! Indigo/violet gradient pages, pink waiting screen, white card.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Palette */
  --indigo: #667eea;
  --violet: #764ba2;
  --orchid: #f093fb;
  --coral: #f5576c;
  --sky: #4facfe;
  --aqua: #00f2fe;
  --blush: #ffb6c1;
  --hot-pink: #ff69b4;
  --plum: #9370db;
  --ghost-white: #f8f8ff;

  /* Text */
  --text-dark: #334155;
  --text-muted: #64748b;

  /* Typography */
  --font-display: 'Frolicsome', 'Comic Sans MS', cursive;
  --font-body: 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 800ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
  font-family: var(--font-body);
}

.app-root {
  position: relative;
  width: 100vw;
  height: 100vh;
  overflow: hidden;
}

/* === Shared Page Background === */
.countdown-page,
.card-page {
  position: relative;
  width: 100%;
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  background: linear-gradient(135deg, var(--indigo) 0%, var(--violet) 100%);
}

.gif-overlay {
  position: absolute;
  inset: 0;
  opacity: 0.2;
  background-size: cover;
  background-position: center;
  background-repeat: no-repeat;
  pointer-events: none;
}

/* === Countdown Page === */
.countdown-page__content {
  position: relative;
  z-index: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 2rem;
  animation: fade-in var(--transition-slow) both;
}

.countdown-page__title {
  font-family: var(--font-display);
  font-size: 3rem;
  color: var(--ghost-white);
  text-align: center;
  text-shadow: 0 4px 12px rgba(0, 0, 0, 0.25);
}

.countdown-page__stage {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
}

.countdown-page__peek {
  width: 160px;
  margin-bottom: -24px;
  animation: peek-up 0.8s ease-out both;
}

.countdown-page__prompt {
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--ghost-white);
  animation: pulse-opacity 1.5s ease-in-out infinite;
}

/* === Countdown Display === */
.countdown-display {
  display: flex;
  gap: 1.5rem;
  padding: 1.5rem 2rem;
  border-radius: 1.5rem;
  background: rgba(255, 255, 255, 0.15);
  backdrop-filter: blur(10px);
}

.countdown-display.blinking {
  animation: blink 2.5s ease-in-out infinite alternate;
}

.countdown-unit {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
}

.countdown-unit__label {
  font-size: 0.75rem;
  font-weight: 700;
  letter-spacing: 0.15em;
  color: var(--ghost-white);
}

.countdown-unit__digits {
  display: flex;
  gap: 0.35rem;
}

.digit-tile {
  width: 3.5rem;
  height: 4.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 0.75rem;
  font-size: 2.5rem;
  font-weight: 700;
  color: white;
  background: linear-gradient(135deg, var(--indigo), var(--violet));
  box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1), 0 2px 4px rgba(0, 0, 0, 0.06);
  transition: transform var(--transition-fast);
}

.digit-tile:hover {
  transform: scale(1.05);
}

.digit-tile.wide {
  width: auto;
  min-width: 3.5rem;
  padding: 0 0.75rem;
}

/* === Static Gift Box === */
.static-gift {
  position: relative;
  width: 180px;
  height: 180px;
  transition: width var(--transition-slow), height var(--transition-slow);
}

.static-gift.large {
  width: 260px;
  height: 260px;
}

.static-gift.shaking {
  animation: shake 0.6s ease-in-out infinite;
}

.static-gift.clickable {
  cursor: pointer;
}

.static-gift__bottom,
.static-gift__top {
  position: absolute;
  left: 0;
  width: 100%;
}

.static-gift__bottom {
  bottom: 0;
  height: 70%;
}

.static-gift__top {
  top: 0;
  height: 40%;
}

/* === Animated Gift Box === */
.animated-gift {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
}

.animated-gift__box {
  position: relative;
  width: 240px;
  height: 240px;
}

.animated-gift__button {
  position: absolute;
  bottom: 0;
  left: 0;
  width: 100%;
  height: 70%;
  border: none;
  background: transparent;
  cursor: pointer;
}

.animated-gift__bottom {
  width: 100%;
  height: 100%;
}

.gift-lid {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 40%;
  transform-origin: bottom left;
  pointer-events: none;
}

.gift-lid.lid-wiggle {
  animation: wiggle 1.2s ease-in-out infinite;
}

.gift-lid.lid-rotating {
  animation: lid-lift 0.7s ease-out forwards;
}

.gift-lid.lid-rotated {
  transform: translate(-40px, -120px) rotate(-35deg);
}

.animated-gift__hint {
  margin-top: 1rem;
  font-weight: 600;
  color: var(--plum);
  animation: pulse-opacity 1.5s ease-in-out infinite;
}

.gift-burst {
  position: absolute;
  inset: -40px;
  pointer-events: none;
}

.gift-burst__piece {
  position: absolute;
  font-size: 1.5rem;
  animation: burst 1.5s ease-out both;
}

/* === Waiting Screen === */
.waiting-screen {
  width: 100%;
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--blush);
}

.waiting-screen__content {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 2rem;
  animation: pop-in var(--transition-slow) both;
}

.waiting-screen__heading {
  text-align: center;
}

.waiting-screen__title {
  font-size: 3rem;
  font-weight: 800;
  margin-bottom: 1rem;
  background: linear-gradient(45deg, var(--hot-pink), #dda0dd, var(--plum));
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
  background-clip: text;
}

.waiting-screen__subtitle,
.waiting-screen__footer p {
  font-size: 1.125rem;
  font-weight: 500;
  color: #9333ea;
}

.waiting-screen__gift {
  position: relative;
}

.waiting-screen__glow {
  position: absolute;
  inset: 0;
  border-radius: 50%;
  background: radial-gradient(circle, rgba(233, 213, 255, 0.4), rgba(251, 207, 232, 0.3), transparent 70%);
  filter: blur(24px);
  animation: glow 2s ease-in-out infinite;
  pointer-events: none;
}

.waiting-screen__float {
  animation: float 3s ease-in-out infinite;
}

.waiting-screen__footer {
  text-align: center;
}

.waiting-screen__footer .waiting-screen__cta {
  margin-top: 0.5rem;
  color: #ec4899;
  font-weight: 600;
  animation: pulse-opacity 1.5s ease-in-out infinite;
}

/* === Birthday Card === */
.birthday-card {
  position: relative;
  z-index: 10;
  max-width: 42rem;
  margin: 0 1rem;
  padding: 3rem;
  border-radius: 1.5rem;
  background: linear-gradient(145deg, #ffffff, #f8fafc);
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25), 0 0 0 1px rgba(255, 255, 255, 0.05);
  text-align: center;
  overflow: hidden;
  animation: card-spring 0.8s cubic-bezier(0.34, 1.56, 0.64, 1) both;
}

.birthday-card__corner {
  position: absolute;
  font-size: 1.5rem;
  pointer-events: none;
}

.birthday-card__corner.top-left { top: 1rem; left: 1rem; }
.birthday-card__corner.top-right { top: 1rem; right: 1rem; }
.birthday-card__corner.bottom-left { bottom: 1rem; left: 1rem; }
.birthday-card__corner.bottom-right { bottom: 1rem; right: 1rem; }

.spin { animation: rotating 20s linear infinite; }
.spin-reverse { animation: rotating 25s linear infinite reverse; }
.sway { animation: sway 3s ease-in-out infinite; }

.birthday-card__title {
  font-family: var(--font-display);
  font-size: 2.75rem;
  margin-bottom: 1.5rem;
  background: linear-gradient(45deg, var(--indigo), var(--violet), var(--orchid), var(--coral));
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
  background-clip: text;
}

.birthday-card__message p {
  margin-bottom: 1rem;
  font-size: 1.05rem;
  line-height: 1.7;
  color: var(--text-dark);
}

.birthday-card__emoji-row {
  display: flex;
  justify-content: center;
  gap: 1rem;
  font-size: 2rem;
}

.bounce {
  display: inline-block;
  animation: bounce 1.2s ease-in-out infinite;
}

/* === Cake === */
.cake {
  position: relative;
  width: 180px;
  margin: 0 auto 2rem;
  display: flex;
  flex-direction: column;
  align-items: center;
}

.cake__candles {
  display: flex;
  gap: 1.25rem;
  margin-bottom: -2px;
}

.cake__candle {
  position: relative;
  width: 10px;
  height: 36px;
  border-radius: 3px;
  background: linear-gradient(180deg, var(--orchid) 0%, var(--coral) 50%, var(--indigo) 100%);
}

.cake__flame {
  position: absolute;
  top: -18px;
  left: -2px;
  width: 14px;
  height: 18px;
  border-radius: 50% 50% 50% 50% / 85% 85% 15% 15%;
  background: linear-gradient(180deg, #ffd700 0%, #ff8c00 25%, #ff6b35 60%, #ff4500 100%);
  box-shadow: 0 0 10px rgba(255, 215, 0, 0.7), 0 0 20px rgba(255, 140, 0, 0.4);
  animation: flicker 1.2s ease-in-out infinite;
}

.cake__tier {
  border-radius: 0.5rem 0.5rem 0.25rem 0.25rem;
  background: linear-gradient(180deg, #f8fafc 0%, #e2e8f0 50%, #cbd5e1 100%);
  box-shadow: 0 8px 16px rgba(100, 116, 139, 0.3), inset 0 -4px 0 var(--violet);
}

.cake__tier.top { width: 120px; height: 40px; }
.cake__tier.bottom { width: 170px; height: 50px; }

.cake__plate {
  width: 200px;
  height: 10px;
  border-radius: 50%;
  background: linear-gradient(90deg, var(--indigo) 0%, var(--violet) 50%, var(--indigo) 100%);
}

/* === Card Controls === */
.card-controls {
  position: fixed;
  top: 1rem;
  right: 1rem;
  z-index: 50;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.card-controls__button {
  padding: 0.75rem;
  border: none;
  border-radius: 9999px;
  font-size: 1rem;
  color: white;
  cursor: pointer;
  background: linear-gradient(135deg, var(--indigo), var(--violet));
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
  transition: transform var(--transition-fast);
}

.card-controls__button:hover { transform: scale(1.1); }
.card-controls__button:active { transform: scale(0.9); }

/* === Photo Frames === */
.photo-spot {
  position: fixed;
  top: 50%;
  z-index: 30;
  transform: translateY(-50%);
}

.photo-spot.left {
  left: 2rem;
  animation: slide-in-left 0.8s ease-out 1.5s both;
}

.photo-spot.right {
  right: 2rem;
  animation: slide-in-right 0.8s ease-out 1.7s both;
}

.photo-frame {
  width: 14rem;
  height: 16rem;
  border: 4px dashed var(--indigo);
  border-radius: 0.5rem;
  overflow: hidden;
  background: rgba(255, 255, 255, 0.1);
  backdrop-filter: blur(10px);
}

.photo-spot.right .photo-frame {
  border-color: var(--violet);
}

.photo-frame__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  filter: drop-shadow(0 4px 8px rgba(0, 0, 0, 0.3));
}

.photo-frame__placeholder {
  width: 100%;
  height: 100%;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  color: white;
  font-size: 0.875rem;
}

.photo-frame__icon {
  font-size: 2rem;
}

/* === Asset Placeholder === */
.asset-placeholder {
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 4rem;
}

/* === Confetti === */
.confetti-overlay {
  position: fixed;
  inset: 0;
  z-index: 5;
  overflow: hidden;
  pointer-events: none;
}

.confetti-piece {
  position: absolute;
  top: -40px;
  border-radius: 2px;
  animation-name: fall;
  animation-timing-function: cubic-bezier(0.45, 0, 0.75, 1);
  animation-fill-mode: both;
}

/* === Animations === */
@keyframes fade-in {
  from { opacity: 0; transform: translateY(-30px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes pop-in {
  from { opacity: 0; transform: scale(0.8); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes peek-up {
  from { opacity: 0; transform: translateY(40px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes blink {
  from { opacity: 1; }
  to { opacity: 0.2; }
}

@keyframes pulse-opacity {
  0%, 100% { opacity: 0.7; }
  50% { opacity: 1; }
}

@keyframes shake {
  0%, 100% { transform: rotate(0deg); }
  25% { transform: rotate(-4deg); }
  75% { transform: rotate(4deg); }
}

@keyframes wiggle {
  0%, 100% { transform: rotate(0deg); }
  25% { transform: rotate(-3deg); }
  75% { transform: rotate(3deg); }
}

@keyframes lid-lift {
  from { transform: translate(0, 0) rotate(0deg); }
  to { transform: translate(-40px, -120px) rotate(-35deg); }
}

@keyframes burst {
  from { opacity: 1; transform: translate(0, 0) scale(0.5); }
  to { opacity: 0; transform: translate(var(--drift), -160px) scale(1.2); }
}

@keyframes glow {
  0%, 100% { opacity: 0.4; transform: scale(1); }
  50% { opacity: 0.8; transform: scale(1.1); }
}

@keyframes float {
  0%, 100% { transform: translateY(0) rotate(0deg); }
  33% { transform: translateY(-8px) rotate(1deg); }
  66% { transform: translateY(-4px) rotate(-1deg); }
}

@keyframes card-spring {
  from { transform: scale(0) rotate(-10deg); }
  to { transform: scale(1) rotate(0deg); }
}

@keyframes rotating {
  from { transform: rotate(0deg); }
  to { transform: rotate(360deg); }
}

@keyframes sway {
  0%, 100% { transform: rotate(0deg) scale(1); }
  50% { transform: rotate(15deg) scale(1.1); }
}

@keyframes bounce {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-10px); }
}

@keyframes flicker {
  0%, 100% { transform: scale(1); opacity: 0.9; }
  33% { transform: scale(1.1) translateX(1px); opacity: 1; }
  66% { transform: scale(0.95) translateX(-1px); opacity: 0.85; }
}

@keyframes slide-in-left {
  from { opacity: 0; transform: translate(-100px, -50%); }
  to { opacity: 1; transform: translate(0, -50%); }
}

@keyframes slide-in-right {
  from { opacity: 0; transform: translate(100px, -50%); }
  to { opacity: 1; transform: translate(0, -50%); }
}

@keyframes fall {
  from { transform: translate(0, 0) rotate(0deg); }
  to { transform: translate(var(--drift), calc(100vh + 80px)) rotate(var(--spin)); }
}
"#;
