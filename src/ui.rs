//! Pages served to the kiosk browser. Both pages resolve their elements
//! once on load and keep all state inside a single controller object.

pub const KIOSK_HTML: &str = r#"<!DOCTYPE html>
<html lang="pt">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Avalie o nosso serviço</title>
  <style>
    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      display: grid;
      place-items: center;
      font-family: "Segoe UI", "Trebuchet MS", sans-serif;
      background: linear-gradient(135deg, #eef4f8, #dbe7f0);
      color: #1f2d3a;
    }

    h1 { text-align: center; font-size: clamp(1.8rem, 4vw, 2.6rem); }

    .buttons { display: flex; gap: 32px; justify-content: center; flex-wrap: wrap; }

    .satisfaction-button {
      border: none;
      border-radius: 50%;
      width: 180px;
      height: 180px;
      font-size: 5rem;
      cursor: pointer;
      box-shadow: 0 12px 30px rgba(31, 45, 58, 0.2);
      transition: transform 150ms ease, opacity 150ms ease;
    }

    .satisfaction-button[data-tipo="1"] { background: #3fb950; }
    .satisfaction-button[data-tipo="2"] { background: #d6c34a; }
    .satisfaction-button[data-tipo="3"] { background: #e5534b; }
    .satisfaction-button:active { transform: scale(0.95); }

    .pulse { animation: pulse 400ms ease; }

    @keyframes pulse {
      50% { transform: scale(1.12); }
    }

    .counter { display: block; text-align: center; margin-top: 12px; font-size: 1.6rem; }

    .popup {
      position: fixed;
      bottom: 40px;
      left: 50%;
      transform: translate(-50%, 200%);
      background: #1f2d3a;
      color: #fff;
      border-radius: 16px;
      padding: 18px 28px;
      font-size: 1.2rem;
      transition: transform 250ms ease;
    }

    .popup.show { transform: translate(-50%, 0); }
  </style>
</head>
<body>
  <main>
    <h1>Como avalia o nosso serviço?</h1>
    <div class="buttons">
      <div>
        <button class="satisfaction-button" data-tipo="1" aria-label="Muito Satisfeito">😀</button>
        <span class="counter" id="count-1">0</span>
      </div>
      <div>
        <button class="satisfaction-button" data-tipo="2" aria-label="Satisfeito">🙂</button>
        <span class="counter" id="count-2">0</span>
      </div>
      <div>
        <button class="satisfaction-button" data-tipo="3" aria-label="Insatisfeito">😞</button>
        <span class="counter" id="count-3">0</span>
      </div>
    </div>
  </main>

  <div class="popup" id="info-popup">
    Obrigado! <strong id="popup-tipo"></strong>
    #<span id="popup-number"></span> às <span id="popup-time"></span>
  </div>

  <script>
    const COOLDOWN_MS = 2000;
    const POPUP_MS = 3000;
    const ROLLOVER_CHECK_MS = 60000;
    const LABELS = { 1: 'Muito Satisfeito', 2: 'Satisfeito', 3: 'Insatisfeito' };

    const bindView = () => ({
      buttons: Array.from(document.querySelectorAll('.satisfaction-button')),
      counters: {
        1: document.getElementById('count-1'),
        2: document.getElementById('count-2'),
        3: document.getElementById('count-3')
      },
      popup: document.getElementById('info-popup'),
      popupTipo: document.getElementById('popup-tipo'),
      popupNumber: document.getElementById('popup-number'),
      popupTime: document.getElementById('popup-time')
    });

    const createTerminal = (view) => {
      let processing = false;
      let dateKey = new Date().toDateString();
      let popupGeneration = 0;

      const setButtonsEnabled = (enabled) => {
        view.buttons.forEach((button) => {
          button.disabled = !enabled;
          button.style.opacity = enabled ? '1' : '0.5';
          button.style.cursor = enabled ? 'pointer' : 'not-allowed';
        });
      };

      const setCounter = (tipo, count) => {
        view.counters[tipo].textContent = count;
      };

      const pulse = (button) => {
        button.classList.add('pulse');
        setTimeout(() => button.classList.remove('pulse'), 400);
      };

      const showPopup = (tipo, number, time) => {
        const generation = ++popupGeneration;
        view.popupTipo.textContent = LABELS[tipo];
        view.popupNumber.textContent = number;
        view.popupTime.textContent = time;
        view.popup.classList.add('show');
        setTimeout(() => {
          if (generation === popupGeneration) {
            view.popup.classList.remove('show');
          }
        }, POPUP_MS);
      };

      const loadStats = async () => {
        try {
          const res = await fetch('/api/stats');
          if (!res.ok) {
            throw new Error(`stats answered ${res.status}`);
          }
          const stats = await res.json();
          [1, 2, 3].forEach((tipo) => setCounter(tipo, stats[tipo] || 0));
        } catch (err) {
          console.error('failed to load stats', err);
        }
      };

      const handleClick = async (button) => {
        if (processing) {
          return;
        }
        const tipo = parseInt(button.dataset.tipo, 10);
        processing = true;
        setButtonsEnabled(false);

        try {
          const res = await fetch('/api/avaliar', {
            method: 'POST',
            headers: { 'content-type': 'application/json' },
            body: JSON.stringify({ tipo })
          });
          if (!res.ok) {
            throw new Error(`submit answered ${res.status}`);
          }
          const receipt = await res.json();
          setCounter(tipo, receipt.sequential_number);
          pulse(button);
          showPopup(tipo, receipt.sequential_number, receipt.time);
        } catch (err) {
          console.error('failed to submit rating', err);
        } finally {
          setTimeout(() => {
            processing = false;
            setButtonsEnabled(true);
          }, COOLDOWN_MS);
        }
      };

      const checkRollover = () => {
        const today = new Date().toDateString();
        if (today === dateKey) {
          return;
        }
        dateKey = today;
        [1, 2, 3].forEach((tipo) => setCounter(tipo, 0));
        loadStats();
      };

      const start = () => {
        loadStats();
        view.buttons.forEach((button) => {
          button.addEventListener('click', () => handleClick(button));
        });
        return setInterval(checkRollover, ROLLOVER_CHECK_MS);
      };

      return { start };
    };

    document.addEventListener('DOMContentLoaded', () => {
      createTerminal(bindView()).start();
    });
  </script>
</body>
</html>
"#;

pub const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="pt">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Dashboard de Satisfação</title>
  <style>
    * { box-sizing: border-box; }

    body {
      margin: 0;
      padding: 32px 18px;
      font-family: "Segoe UI", "Trebuchet MS", sans-serif;
      background: #f4f6f8;
      color: #1f2d3a;
    }

    .app { width: min(960px, 100%); margin: 0 auto; display: grid; gap: 24px; }

    .card { background: #fff; border-radius: 16px; padding: 24px; box-shadow: 0 8px 24px rgba(31, 45, 58, 0.08); }

    .stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; text-align: center; }
    .stat-value { font-size: 2.4rem; font-weight: 600; }

    .bar { display: grid; grid-template-columns: 40px 1fr 60px; align-items: center; gap: 12px; margin: 10px 0; }
    .bar-track { background: #e7ecf0; border-radius: 8px; height: 22px; overflow: hidden; }
    .bar-fill { height: 100%; width: 0%; transition: width 400ms ease; }
    #bar-fill-1 { background: #3fb950; }
    #bar-fill-2 { background: #d6c34a; }
    #bar-fill-3 { background: #e5534b; }

    .history-item { display: flex; padding: 10px 0; border-bottom: 1px solid #eef1f4; }
    .history-item-left { display: flex; gap: 12px; align-items: center; }
    .history-emoji { font-size: 1.8rem; }
    .history-time { color: #6b7785; font-size: 0.9rem; }
    .empty-message { color: #6b7785; text-align: center; }

    a.export { color: #2f6f9f; }
  </style>
</head>
<body>
  <div class="app">
    <header>
      <h1>Satisfação de hoje</h1>
      <p id="current-date"></p>
      <a class="export" href="/api/export">Exportar CSV</a>
    </header>

    <section class="card stats">
      <div><div class="stat-value" id="stat-1">0</div>😀 Muito Satisfeito</div>
      <div><div class="stat-value" id="stat-2">0</div>🙂 Satisfeito</div>
      <div><div class="stat-value" id="stat-3">0</div>😞 Insatisfeito</div>
      <div><div class="stat-value" id="stat-total">0</div>Total</div>
    </section>

    <section class="card">
      <div class="bar" id="bar-1"><span>😀</span><div class="bar-track"><div class="bar-fill" id="bar-fill-1"></div></div><span class="bar-label">0%</span></div>
      <div class="bar" id="bar-2"><span>🙂</span><div class="bar-track"><div class="bar-fill" id="bar-fill-2"></div></div><span class="bar-label">0%</span></div>
      <div class="bar" id="bar-3"><span>😞</span><div class="bar-track"><div class="bar-fill" id="bar-fill-3"></div></div><span class="bar-label">0%</span></div>
    </section>

    <section class="card">
      <h2>Histórico</h2>
      <div id="history-list"></div>
    </section>
  </div>

  <script>
    const REFRESH_MS = 5000;
    const EMPTY_HISTORY = 'Nenhuma avaliação registada hoje';
    const TYPES = {
      1: { emoji: '😀', label: 'Muito Satisfeito' },
      2: { emoji: '🙂', label: 'Satisfeito' },
      3: { emoji: '😞', label: 'Insatisfeito' }
    };

    const bindView = () => {
      const bar = (tipo) => ({
        fill: document.getElementById(`bar-fill-${tipo}`),
        label: document.querySelector(`#bar-${tipo} .bar-label`)
      });
      return {
        date: document.getElementById('current-date'),
        stats: {
          1: document.getElementById('stat-1'),
          2: document.getElementById('stat-2'),
          3: document.getElementById('stat-3')
        },
        total: document.getElementById('stat-total'),
        bars: { 1: bar(1), 2: bar(2), 3: bar(3) },
        history: document.getElementById('history-list')
      };
    };

    const percentage = (count, total) => (total > 0 ? Math.round((count / total) * 100) : 0);

    const createDashboard = (view) => {
      const renderChart = (stats, total) => {
        [1, 2, 3].forEach((tipo) => {
          const value = `${percentage(stats[tipo] || 0, total)}%`;
          view.bars[tipo].fill.style.width = value;
          view.bars[tipo].label.textContent = value;
        });
      };

      const loadStats = async () => {
        try {
          const res = await fetch('/api/stats');
          if (!res.ok) {
            throw new Error(`stats answered ${res.status}`);
          }
          const stats = await res.json();
          let total = 0;
          [1, 2, 3].forEach((tipo) => {
            const count = stats[tipo] || 0;
            view.stats[tipo].textContent = count;
            total += count;
          });
          view.total.textContent = total;
          renderChart(stats, total);
        } catch (err) {
          console.error('failed to load stats', err);
        }
      };

      const historyRow = (event) => {
        const type = TYPES[event.tipo];
        const item = document.createElement('div');
        item.className = 'history-item';
        item.innerHTML = `
          <div class="history-item-left">
            <span class="history-emoji">${type.emoji}</span>
            <div>
              <div class="history-label">${type.label}</div>
              <div class="history-time">#${event.sequential_number} às ${event.avaliacao_time}</div>
            </div>
          </div>`;
        return item;
      };

      const loadHistory = async () => {
        try {
          const res = await fetch('/api/avaliacoes');
          if (!res.ok) {
            throw new Error(`history answered ${res.status}`);
          }
          const body = await res.json();
          const events = body.avaliacoes || [];
          if (events.length === 0) {
            view.history.innerHTML = `<p class="empty-message">${EMPTY_HISTORY}</p>`;
            return;
          }
          view.history.replaceChildren(...events.map(historyRow));
        } catch (err) {
          console.error('failed to load history', err);
        }
      };

      const refresh = async () => {
        await loadStats();
        await loadHistory();
      };

      const start = () => {
        view.date.textContent = new Date().toLocaleDateString('pt-PT', {
          weekday: 'long',
          year: 'numeric',
          month: 'long',
          day: 'numeric'
        });
        refresh();
        return setInterval(refresh, REFRESH_MS);
      };

      return { start };
    };

    document.addEventListener('DOMContentLoaded', () => {
      createDashboard(bindView()).start();
    });
  </script>
</body>
</html>
"#;
